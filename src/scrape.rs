// src/scrape.rs
use crate::{
    config::options::ScrapeOptions,
    core::{Fetch, PageDocument},
    data::ResultSet,
    progress::Progress,
    specs::top10,
};

/// Why a platform contributed what it did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlatformOutcome {
    Found(usize),
    /// Page fetched, but no qualifying card for this platform.
    NotListed,
    /// Page could not be fetched; carries the logged reason.
    FetchFailed(String),
}

impl PlatformOutcome {
    pub fn count(&self) -> usize {
        match self {
            PlatformOutcome::Found(n) => *n,
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScrapeReport {
    pub results: ResultSet,
    /// One entry per requested platform, in request order.
    pub outcomes: Vec<(String, PlatformOutcome)>,
}

impl ScrapeReport {
    pub fn outcome(&self, platform: &str) -> Option<&PlatformOutcome> {
        self.outcomes
            .iter()
            .find(|(p, _)| p == platform)
            .map(|(_, o)| o)
    }

    pub fn fetch_failed(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, o)| matches!(o, PlatformOutcome::FetchFailed(_)))
    }
}

/// Fetch the page once, then pull every platform's ranking out of it.
/// Never fails: a fetch error or a missing card just means zero rows.
pub fn collect_shows(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeReport {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.platforms.len());
    }

    let page: Result<PageDocument, String> =
        fetcher.fetch(&opts.base_url).map_err(|e| e.to_string());

    // Reported once: through the progress sink if there is one, else the log.
    if let Err(reason) = &page {
        let msg = format!("Error fetching {}: {reason}", opts.base_url);
        match progress.as_deref_mut() {
            Some(p) => {
                log::debug!("{msg}");
                p.log(&msg);
            }
            None => log::error!("{msg}"),
        }
    }

    let mut report = ScrapeReport::default();

    for platform in &opts.platforms {
        if let Some(p) = progress.as_deref_mut() {
            p.platform_started(platform);
        }

        let outcome = match &page {
            Ok(doc) => {
                let shows = top10::extract_with_base(doc, platform, &opts.base_url);
                let n = shows.len();
                report.results.extend(shows);
                if n == 0 {
                    PlatformOutcome::NotListed
                } else {
                    PlatformOutcome::Found(n)
                }
            }
            Err(reason) => PlatformOutcome::FetchFailed(reason.clone()),
        };

        if let Some(p) = progress.as_deref_mut() {
            p.platform_done(platform, outcome.count());
        }
        report.outcomes.push((platform.clone(), outcome));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    report
}
