// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::config::{consts::COLUMNS, options::ExportOptions};
use crate::data::ResultSet;
use crate::error::ExportError;

/// Write the run's results to `<out_dir>/<prefix>_<timestamp>.csv`.
/// The header row is always written, so an empty run still yields a valid table.
/// Returns the final path written to.
pub fn export(
    results: &ResultSet,
    export: &ExportOptions,
    stamp: &DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    let path = export.out_path(stamp);
    write_export_to_path(&path, results)?;
    log::info!("Wrote {} rows to {}", results.len(), path.display());
    Ok(path)
}

/// Ensure parent dir exists; create/truncate file; write header + rows.
pub fn write_export_to_path(path: &Path, results: &ResultSet) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_rows(&mut out, results)?;
    out.flush()?;
    Ok(())
}

/// Serialize header + one row per entry, in result order, to any writer.
pub fn write_rows<W: Write>(w: W, results: &ResultSet) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(w);

    wtr.write_record(COLUMNS)?;
    for entry in results {
        wtr.write_record(entry.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
