// src/specs/exam_result.rs
//
// Whole-page parser: metadata panels + section tallies → Report.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::core::Document;
use crate::error::ScrapeError;
use crate::report::Report;

use super::{info_panel, sections};

/// Build the report from an already parsed page.
pub fn parse_doc(doc: &Document) -> Report {
    let root = doc.root();
    Report::new(
        info_panel::extract_panels(root),
        sections::extract_sections(root),
    )
}

/// Parse raw markup and extract the report.
///
/// A panic anywhere below is turned into [`ScrapeError::Extract`] so one bad
/// page cannot take the process down.
pub fn parse_markup(markup: &str) -> Result<Report, ScrapeError> {
    panic::catch_unwind(AssertUnwindSafe(|| parse_doc(&Document::parse(markup))))
        .map_err(|payload| ScrapeError::Extract(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s!(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!("unexpected document structure")
    }
}
