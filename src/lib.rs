// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod render;
pub mod report;
pub mod scrape;

pub use error::{ExportError, FetchError, ScrapeError};
pub use report::{InfoPanel, Outcome, OverallResult, Report, SectionResult};
