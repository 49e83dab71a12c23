// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, TimeZone};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Origin that hosts every Top 10 card; also the prefix for relative title links.
    pub base_url: String,
    pub user_agent: String,
    pub platforms: Vec<String>,
    /// Blocking sleep before every request.
    pub pause: Duration,
    pub timeout: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            platforms: PLATFORMS.iter().map(|p| p.to_string()).collect(),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub file_prefix: String,
    pub preview_rows: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_prefix: FILE_PREFIX.to_string(),
            preview_rows: PREVIEW_ROWS,
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<prefix>_<YYYYMMDD_HHMMSS>.csv`
    pub fn out_path<Tz: TimeZone>(&self, stamp: &DateTime<Tz>) -> PathBuf
    where
        Tz::Offset: std::fmt::Display,
    {
        let name = format!(
            "{}_{}.{}",
            self.file_prefix,
            stamp.format(TIMESTAMP_FORMAT),
            FILE_EXT
        );
        self.out_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn out_path_uses_prefix_and_timestamp() {
        let export = ExportOptions {
            out_dir: PathBuf::from("out"),
            ..ExportOptions::default()
        };
        let stamp = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(
            export.out_path(&stamp),
            PathBuf::from("out").join("top_shows_20240307_090501.csv")
        );
    }

    #[test]
    fn default_platforms_keep_list_order() {
        let scrape = ScrapeOptions::default();
        assert_eq!(scrape.platforms.first().map(String::as_str), Some("netflix"));
        assert_eq!(scrape.platforms.last().map(String::as_str), Some("paramount-plus"));
        assert_eq!(scrape.platforms.len(), 7);
        assert_eq!(scrape.pause, Duration::from_secs(2));
    }
}
