// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use top10_scrape::core::{Fetch, PageDocument};
use top10_scrape::error::FetchError;
use top10_scrape::progress::Progress;

pub const HOME_HTML: &str = include_str!("../fixtures/home.html");

/// Serves canned markup, or a 500 when `markup` is `None`. Counts calls.
pub struct StubFetcher {
    pub markup: Option<String>,
    pub calls: Cell<usize>,
}

impl StubFetcher {
    pub fn serving(markup: &str) -> Self {
        Self {
            markup: Some(markup.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            markup: None,
            calls: Cell::new(0),
        }
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<PageDocument, FetchError> {
        self.calls.set(self.calls.get() + 1);
        match &self.markup {
            Some(m) => Ok(PageDocument::parse(m)),
            None => Err(FetchError::Status {
                status: 500,
                url: url.to_string(),
            }),
        }
    }
}

/// Records every callback as the console line it stands for.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub events: Vec<String>,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.events.push(msg.to_string());
    }

    fn platform_started(&mut self, platform: &str) {
        self.events.push(format!("Scraping {platform}..."));
    }

    fn platform_done(&mut self, platform: &str, count: usize) {
        self.events.push(format!("Found {count} shows for {platform}"));
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("top10_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
