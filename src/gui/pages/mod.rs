// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    gui::app::App,
};

pub mod cocoa;
pub mod ratings;
pub mod reviews;
pub mod top_companies;

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// Page-specific controls above the content.
    /// Returns true when an analysis option changed.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool { false }

    /// Draw the page body from the app's current data.
    fn draw(&self, ui: &mut egui::Ui, app: &App);
}

/// Shared placeholder while there's nothing to show.
pub(crate) fn empty_hint(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.weak("No data yet: Fetch the review page or load the local cache.");
    });
}
