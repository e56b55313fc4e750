// src/gui/components/url_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Result URL:");

        let width = (ui.available_width() - 80.0).max(200.0);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url)
                .hint_text("https://…")
                .font(egui::TextStyle::Monospace)
                .desired_width(width),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_enabled(!app.running, egui::Button::new("Scrape"))
            .clicked();

        if (clicked || submitted) && !app.running {
            actions::scrape(app, ui.ctx());
        }
    });
}
