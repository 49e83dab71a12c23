// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://flixpatrol.com";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_PAUSE_MS: u64 = 2_000; // be polite
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const PLATFORMS: &[&str] = &[
    "netflix",
    "hbo",
    "disney",
    "apple-tv",
    "hulu",
    "amazon-prime",
    "paramount-plus",
];

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const FILE_PREFIX: &str = "top_shows";
pub const FILE_EXT: &str = "csv";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const COLUMNS: [&str; 4] = ["platform", "rank", "title", "url"];

// Console
pub const PREVIEW_ROWS: usize = 5;
