// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::report_to_string;
use crate::error::ExportError;
use crate::report::Report;

/// Write the report as CSV/TSV to `export.out_path()`.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, report: Option<&Report>) -> Result<PathBuf, ExportError> {
    let report = report.ok_or(ExportError::NoReport)?;
    let path = export.out_path();
    write_text(&path, &report_to_string(report, export))?;
    logf!("Export: {:?} {:?} → {}", export.format, export.scope, path.display());
    Ok(path)
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    fs::write(path, contents)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}
