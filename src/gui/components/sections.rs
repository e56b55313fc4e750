// src/gui/components/sections.rs
//
// Section tallies plus the Overall row. Counts are centered.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::report::Report;

pub fn draw(ui: &mut egui::Ui, report: &Report) {
    ui.heading("Sections");

    if report.sections().is_empty() {
        ui.label("No sections found on this page.");
        return;
    }

    let headers = Report::section_headers();
    let rows = report.section_rows();
    let overall_ix = rows.len() - 1;

    let mut table = TableBuilder::new(ui)
        .id_salt("sections_table")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(160.0).resizable(true));
    for _ in 1..headers.len() {
        table = table.column(Column::auto().at_least(70.0));
    }

    table
        .header(22.0, |mut header| {
            for h in &headers {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|mut body| {
            for (ri, row) in rows.iter().enumerate() {
                body.row(20.0, |mut tr| {
                    for (ci, cell) in row.iter().enumerate() {
                        tr.col(|ui| {
                            let mut text = RichText::new(cell);
                            if ri == overall_ix {
                                text = text.strong();
                            }
                            if ci == 0 {
                                ui.label(text);
                            } else {
                                ui.centered_and_justified(|ui| { ui.label(text); });
                            }
                        });
                    }
                });
            }
        });
}
