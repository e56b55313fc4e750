// src/csv.rs
use std::io::{self, Write};

use crate::config::options::{ExportOptions, ExportScope};
use crate::report::Report;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify a table, header line first when given.
pub fn to_delimited(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Report export ---------------- */

/// Full export text (Copy/Export): sections table, then a blank line and the
/// panel table, limited by `export.scope`.
pub fn report_to_string(report: &Report, export: &ExportOptions) -> String {
    let sep = export.format.delim();
    let table = |headers: Vec<String>, rows: Vec<Vec<String>>| {
        let headers = export.include_headers.then_some(headers);
        to_delimited(headers.as_deref(), &rows, sep)
    };
    let sections = || table(Report::section_headers(), report.section_rows());
    let panels = || table(Report::panel_headers(), report.panel_rows());

    match export.scope {
        ExportScope::Sections => sections(),
        ExportScope::Panels => panels(),
        ExportScope::All => join!(&sections(), "\n", &panels()),
    }
}
