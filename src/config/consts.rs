// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("exam_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Local store (debug log only; reports are never persisted)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Extraction
pub const MISSING_CELL: &str = "---";

// Presentation
pub const NO_CLASS: &str = "no-class";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "report";
