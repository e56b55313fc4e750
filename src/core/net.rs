// src/core/net.rs
//
// One blocking GET per call. No retries, no cache.

use std::time::Instant;

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::error::FetchError;

/// Reject what the HTTP client would choke on, with a readable message.
pub fn validate_url(url: &str) -> Result<&str, FetchError> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if url.is_empty() || !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(FetchError::InvalidUrl(s!(url)));
    }
    Ok(url)
}

fn client(opts: &FetchOptions) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(opts.timeout())
        .build()
        .map_err(FetchError::Client)
}

/// GET `url` and return the decoded body. Non-2xx is an error.
pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String, FetchError> {
    let url = validate_url(url)?;
    let client = client(opts)?;

    let t = Instant::now();
    logd!("Fetch: GET {url}");

    let transport = |source: reqwest::Error| FetchError::Transport { url: s!(url), source };

    let resp = client.get(url).send().map_err(transport)?;
    let status = resp.status();
    if !status.is_success() {
        loge!("Fetch: {url} → HTTP {}", status.as_u16());
        return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
    }

    let body = resp.text().map_err(transport)?;
    logf!("Fetch: {url} → {} bytes in {:?}", body.len(), t.elapsed());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(validate_url(" https://example.org/r?id=1 ").ok(), Some("https://example.org/r?id=1"));
        assert!(validate_url("HTTP://example.org").is_ok());
    }

    #[test]
    fn rejects_empty_and_other_schemes() {
        assert!(matches!(validate_url("   "), Err(FetchError::InvalidUrl(_))));
        assert!(matches!(validate_url("ftp://example.org"), Err(FetchError::InvalidUrl(_))));
        assert!(matches!(validate_url("example.org"), Err(FetchError::InvalidUrl(_))));
    }
}
