// src/specs/mod.rs
//! # Page parsers
//!
//! Each parser knows where the data lives on one kind of page and how to read
//! it. Parsers are pure: they take a parsed [`Document`](crate::core::Document)
//! and return plain data. Fetching, progress, logging and presentation live
//! in the layers above (`scrape`, `gui`, `cli`).
//!
//! ## Conventions
//! - Selectors are `(tag, class)` pairs kept as consts at the top of each file.
//! - Missing markup degrades to a sentinel or an empty value, never an error.
//! - Output order follows document order.
//!
//! ## Call chain
//! ```text
//! GUI / CLI → scrape::collect_report → core::net::http_get
//!                                    ↘ specs::exam_result::parse_markup
//!                                        ├ info_panel::extract_panels
//!                                        └ sections::extract_sections
//! ```
pub mod exam_result;
pub mod info_panel;
pub mod sections;
