// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::report_to_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(report) = app.report.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no report");
        return;
    };

    let txt = report_to_string(report, &app.state.options.export);
    logf!(
        "Copy: format={:?} scope={:?} bytes={}",
        app.state.options.export.format,
        app.state.options.export.scope,
        txt.len()
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
