// src/core/net.rs

// HTTP GET via reqwest's blocking client

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use super::html::PageDocument;
use crate::config::options::ScrapeOptions;
use crate::error::FetchError;

/// Anything that can turn a URL into a parsed page.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<PageDocument, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    pause: Duration,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        // Origin rejects non-browser clients
        let agent = HeaderValue::from_str(&opts.user_agent)
            .map_err(|_| FetchError::InvalidHeader(opts.user_agent.clone()))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(opts.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            pause: opts.pause,
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<PageDocument, FetchError> {
        thread::sleep(self.pause);

        log::info!("GET {url}");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text()?;
        log::info!("Fetched {} bytes from {url}", body.len());
        Ok(PageDocument::parse(&body))
    }
}
