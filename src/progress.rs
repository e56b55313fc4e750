// src/progress.rs
/// Lightweight progress reporting for a scrape.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once, before anything touches the network.
    fn begin(&mut self, _url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}
