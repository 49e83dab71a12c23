// src/core/mod.rs

pub mod html;
pub mod net;

pub use html::PageDocument;
pub use net::{Fetch, HttpFetcher};
