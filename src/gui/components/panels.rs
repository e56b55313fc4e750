// src/gui/components/panels.rs
//
// Candidate info panels, one grid each. Hovering a row shows the row key
// used in exports.

use eframe::egui;

use crate::render::classify;
use crate::report::Report;

pub fn draw(ui: &mut egui::Ui, report: &Report) {
    ui.heading("Candidate info");

    if report.panels().is_empty() {
        ui.label("No info panels found on this page.");
        return;
    }

    for (pi, panel) in report.panels().iter().enumerate() {
        ui.add_space(6.0);
        ui.label(egui::RichText::new(format!("Panel {}", pi + 1)).strong());

        if panel.table_rows.is_empty() {
            ui.weak("(no table)");
            continue;
        }

        egui::Grid::new(("info_panel", pi))
            .striped(true)
            .num_columns(panel.table_rows.iter().map(|r| r.len()).max().unwrap_or(0))
            .show(ui, |ui| {
                for row in &panel.table_rows {
                    let key = row.first().map(|c| classify(c)).unwrap_or_else(|| classify(""));
                    for cell in row {
                        ui.label(cell).on_hover_text(&key);
                    }
                    ui.end_row();
                }
            });
    }
}
