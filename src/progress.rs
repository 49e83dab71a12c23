// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of platforms to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A platform lookup is about to start.
    fn platform_started(&mut self, _platform: &str) {}

    /// A platform lookup finished with `count` shows (0 on miss or fetch failure).
    fn platform_done(&mut self, _platform: &str, _count: usize) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// Prints the classic console progress lines.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn platform_started(&mut self, platform: &str) {
        println!("Scraping {platform}...");
    }

    fn platform_done(&mut self, platform: &str, count: usize) {
        println!("Found {count} shows for {platform}");
    }
}
