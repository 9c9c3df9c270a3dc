// src/gui/components/source_bar.rs
//
// URL field + Fetch / Load cache buttons.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Source:");
        let field = egui::TextEdit::singleline(&mut app.url_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(ui.available_width() - 200.0);
        let resp = ui.add(field);
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Fetch").clicked() || enter {
            actions::fetch(app);
        }

        if ui
            .add_enabled(app.has_cache, egui::Button::new("Load cache"))
            .on_hover_text(crate::store::store_path().display().to_string())
            .clicked()
        {
            actions::load_cache(app);
        }
    });
    ui.add_space(4.0);
}
