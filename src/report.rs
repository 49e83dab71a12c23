// src/report.rs
//! Console summary printed after a run.

use std::fmt::Write;
use std::path::Path;

use crate::config::consts::COLUMNS;
use crate::data::ResultSet;

/// Per-platform row counts, in platform order, zeros included.
pub fn render_summary(results: &ResultSet, platforms: &[String]) -> String {
    let counts = results.counts(platforms);
    let width = counts.iter().map(|(p, _)| p.len()).max().unwrap_or(0).max("platform".len());

    let mut out = String::from("Scraping Summary:\n");
    let _ = writeln!(out, "{:<width$}  shows", "platform");
    for (platform, n) in &counts {
        let _ = writeln!(out, "{platform:<width$}  {n:>5}");
    }
    let _ = writeln!(out, "{:<width$}  {:>5}", "total", results.len());
    out
}

pub fn render_saved(path: &Path) -> String {
    format!("Results saved to {}", path.display())
}

/// The first `n` rows as a left-aligned text table with a header line.
pub fn render_preview(results: &ResultSet, n: usize) -> String {
    let rows: Vec<[String; 4]> = results.head(n).iter().map(|e| e.to_row()).collect();
    if rows.is_empty() {
        return String::from("Sample of scraped data:\n(no rows)\n");
    }

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::from("Sample of scraped data:\n");
    push_line(&mut out, &COLUMNS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
