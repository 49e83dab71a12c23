// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction rules. A spec knows *where the data lives in the
//! HTML* and how to pull it out of an already-parsed [`PageDocument`].
//!
//! ## What lives here
//! - **Pure extraction** over a parsed document; no networking.
//! - **Selector choice & precedence** (e.g. first qualifying card wins).
//! - **Light shaping** of results into [`ShowEntry`] values.
//!
//! ## What does **not** live here
//! - Fetching, pacing, or error reporting for the network (`core::net`).
//! - Aggregation across platforms (`scrape`).
//! - CSV layout or console output (`file`, `report`).
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline markup or saved fixtures.
//!
//! [`PageDocument`]: crate::core::PageDocument
//! [`ShowEntry`]: crate::data::ShowEntry
pub mod top10;
