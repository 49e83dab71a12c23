// src/specs/top10.rs
//! Scraping *spec* for the streaming Top 10 panels on the home page.
//!
//! The page renders one `div.card` per ranking panel. The panel we want for a
//! platform carries:
//! - a `div.text-gray-500` label whose whole content is `Top shows`, and
//! - a link into that platform's ranking, `/top10/<platform>/...`.
//!
//! Inside that card every `/title/...` link is one ranked show, in order.
//! Ranks are assigned from link position, never read from the page.
//!
//! Only the first qualifying card is used; later duplicates are ignored.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::config::consts::BASE_URL;
use crate::core::html::{single_string, trimmed_text};
use crate::core::PageDocument;
use crate::data::ShowEntry;

const TOP_SHOWS_LABEL: &str = "Top shows";
const TITLE_PATH: &str = "/title/";

static CARD: LazyLock<Selector> = LazyLock::new(|| sel("div.card"));
static GRAY_LABEL: LazyLock<Selector> = LazyLock::new(|| sel("div.text-gray-500"));
static LINK: LazyLock<Selector> = LazyLock::new(|| sel("a[href]"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid static selector {css:?}: {e:?}"))
}

/// Extract the ranked shows for `platform`, resolving links against the default origin.
pub fn extract(doc: &PageDocument, platform: &str) -> Vec<ShowEntry> {
    extract_with_base(doc, platform, BASE_URL)
}

/// Extract the ranked shows for `platform`. An absent card is an empty result, not an error.
///
/// Relative hrefs are joined to `base_url` with exactly one `/` between them,
/// so `title/x/` and `/title/x/` resolve alike. Hrefs that are already absolute
/// (`http://` or `https://`) are kept unchanged instead of being prefixed.
pub fn extract_with_base(doc: &PageDocument, platform: &str, base_url: &str) -> Vec<ShowEntry> {
    let Some(card) = find_top10_card(doc, platform) else {
        log::debug!("No Top shows card for {platform}");
        return Vec::new();
    };

    card.select(&LINK)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            href.contains(TITLE_PATH).then_some((a, href))
        })
        .zip(1u32..)
        .map(|((a, href), rank)| ShowEntry {
            platform: platform.to_string(),
            rank,
            title: link_title(a),
            url: absolute_url(base_url, href),
        })
        .collect()
}

/// First card, in document order, that is both a "Top shows" panel and
/// links to `platform`'s ranking.
pub fn find_top10_card<'a>(doc: &'a PageDocument, platform: &str) -> Option<ElementRef<'a>> {
    let platform_path = format!("/top10/{platform}/");
    doc.select(&CARD)
        .find(|card| is_top_shows_card(*card) && links_to(*card, &platform_path))
}

fn is_top_shows_card(card: ElementRef<'_>) -> bool {
    card.select(&GRAY_LABEL)
        .any(|label| single_string(label).as_deref() == Some(TOP_SHOWS_LABEL))
}

fn links_to(card: ElementRef<'_>, path: &str) -> bool {
    card.select(&LINK)
        .filter_map(|a| a.value().attr("href"))
        .any(|href| href.contains(path))
}

/// `title` attribute wins, even when empty; otherwise the visible text.
fn link_title(a: ElementRef<'_>) -> String {
    match a.value().attr("title") {
        Some(t) => t.to_string(),
        None => trimmed_text(a),
    }
}

fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{base}{href}")
    } else {
        format!("{base}/{href}")
    }
}
