// src/cli.rs
use chrono::Local;
use env_logger::Env;

use crate::{
    config::options::AppOptions,
    core::HttpFetcher,
    file, report,
    progress::ConsoleProgress,
    scrape,
};

/// One full scrape-and-export cycle with default options. Takes no arguments.
pub fn run() -> color_eyre::Result<()> {
    // RUST_LOG only tunes verbosity
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();

    run_with(&AppOptions::default())
}

pub fn run_with(opts: &AppOptions) -> color_eyre::Result<()> {
    let fetcher = HttpFetcher::new(&opts.scrape)?;

    let mut progress = ConsoleProgress;
    let scraped = scrape::collect_shows(&fetcher, &opts.scrape, Some(&mut progress));
    let results = &scraped.results;

    let path = file::export(results, &opts.export, &Local::now())?;

    println!();
    print!("{}", report::render_summary(results, &opts.scrape.platforms));
    println!();
    println!("{}", report::render_saved(&path));
    println!();
    print!("{}", report::render_preview(results, opts.export.preview_rows));

    Ok(())
}
