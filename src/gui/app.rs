// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    error::ScrapeError,
    report::Report,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Exam Result Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last successful scrape; replaced wholesale, never edited
    pub report: Option<Report>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<Result<Report, ScrapeError>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: window={}x{}", state.gui.window_w, state.gui.window_h);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            report: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_scrape(self);

        egui::TopBottomPanel::top("url_bar").show(ctx, |ui| {
            components::url_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running {
                    ui.spinner();
                }
                ui.label(format!("Status: {}", self.status_text()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            let Some(report) = self.report.as_ref() else {
                ui.label("No report yet. Paste a result page URL above and press Scrape.");
                return;
            };

            egui::ScrollArea::vertical()
                .id_salt("report_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::sections::draw(ui, report);
                    ui.add_space(12.0);
                    components::panels::draw(ui, report);
                });
        });
    }
}
