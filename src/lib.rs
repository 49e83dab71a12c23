// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod specs;
