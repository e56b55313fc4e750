// src/scrape.rs
//
// The request pipeline: fetch → parse → extract. Strictly sequential,
// no retries, nothing cached between calls.

use std::time::Instant;

use crate::{
    config::options::FetchOptions,
    core::net,
    error::ScrapeError,
    progress::Progress,
    report::Report,
    specs::exam_result,
};

/// Fetch one result page and extract its report.
pub fn collect_report(
    url: &str,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(url);
        p.log("Fetching page…");
    }

    let result = net::http_get(url, opts)
        .map_err(ScrapeError::from)
        .and_then(|markup| {
            if let Some(p) = progress.as_deref_mut() {
                p.log("Extracting results…");
            }
            let t = Instant::now();
            let report = exam_result::parse_markup(&markup);
            logd!("Parse: {} bytes in {:?}", markup.len(), t.elapsed());
            report
        });

    match &result {
        Ok(report) => {
            let o = report.overall();
            logf!(
                "Report: panels={} sections={} correct={} wrong={} not_answered={}",
                report.panels().len(),
                report.sections().len(),
                o.correct, o.wrong, o.not_answered
            );
        }
        Err(e) => loge!("Scrape: {url}: {e}"),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(result.is_ok());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, url: &str) { self.events.push(format!("begin {url}")); }
        fn log(&mut self, msg: &str) { self.events.push(s!(msg)); }
        fn finish(&mut self, ok: bool) { self.events.push(format!("finish {ok}")); }
    }

    #[test]
    fn invalid_url_fails_before_network() {
        let mut rec = Recorder::default();
        let err = collect_report("not a url", &FetchOptions::default(), Some(&mut rec))
            .expect_err("should fail");
        assert!(matches!(err, ScrapeError::Fetch(FetchError::InvalidUrl(_))));
        assert_eq!(rec.events, vec!["begin not a url", "Fetching page…", "finish false"]);
    }
}
