// src/gui/actions/scrape.rs
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{gui::app::App, gui::progress::GuiProgress, scrape};

/// Start a scrape of the URL box on a worker thread.
/// The result comes back through `app.pending`; see [`poll_scrape`].
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let url = app.state.gui.url.trim().to_string();
    if url.is_empty() {
        app.status("Enter a result page URL first");
        return;
    }

    logf!("Scrape: Begin url={url}");
    app.running = true;

    let (tx, rx) = mpsc::channel();
    app.pending = Some(rx);

    let fetch = app.state.options.fetch.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();

    thread::spawn(move || {
        // → This is where the scrape happens ←
        let result = scrape::collect_report(&url, &fetch, Some(&mut prog));
        let _ = tx.send(result);
        ctx.request_repaint();
    });
}

/// Pick up a finished scrape, if any. Called once per frame.
pub fn poll_scrape(app: &mut App) {
    let Some(rx) = app.pending.as_ref() else { return };

    let result = match rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Scrape: Worker exited without a result");
            app.pending = None;
            app.running = false;
            app.status("Error: scrape worker stopped unexpectedly");
            return;
        }
    };

    app.pending = None;
    app.running = false;

    match result {
        Ok(report) => {
            let o = report.overall();
            app.status(format!(
                "Ready: {} section(s), {} correct / {} wrong / {} not answered",
                report.sections().len(), o.correct, o.wrong, o.not_answered
            ));
            app.report = Some(report);
        }
        Err(e) => {
            // A failed request never leaves a partial report on screen.
            app.report = None;
            app.status(format!("Error: {e}"));
        }
    }
}
