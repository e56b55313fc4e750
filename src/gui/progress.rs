// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Mirrors scrape stages into the status line. Runs on the worker thread,
/// so every update asks the UI thread to repaint.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, url: &str) {
        self.set_status(format!("Scraping {}", url));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn finish(&mut self, ok: bool) {
        if !ok {
            self.set_status(s!("Scrape failed"));
        }
    }
}
