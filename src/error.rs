// src/error.rs
//
// Request-level failures. Missing elements on the page are *not* errors;
// the extractor degrades them to sentinels and zero counts.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not extract results: {0}")]
    Extract(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nothing to export yet; scrape a page first")]
    NoReport,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
