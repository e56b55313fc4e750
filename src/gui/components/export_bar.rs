// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::{ExportFormat, ExportScope},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Scope + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();

            ui.label("Include:");
            ui.selectable_value(&mut export.scope, ExportScope::All, "Everything");
            ui.selectable_value(&mut export.scope, ExportScope::Sections, "Sections");
            ui.selectable_value(&mut export.scope, ExportScope::Panels, "Info panels");

            ui.separator();

            if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    ui.horizontal(|ui| {
        let has_report = app.report.is_some();
        if ui.add_enabled(has_report, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_report, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}
