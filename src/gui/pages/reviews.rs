// src/gui/pages/reviews.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::{app::App, components::data_table}};

use super::Page;

pub struct ReviewsPage;
pub static PAGE: ReviewsPage = ReviewsPage;

const WIDTHS: &[f32] = &[260.0, 80.0, 130.0];
const NUMERIC: &[usize] = &[1, 2];

impl Page for ReviewsPage {
    fn kind(&self) -> PageKind { PageKind::Reviews }
    fn title(&self) -> &'static str { "Reviews" }

    fn draw(&self, ui: &mut egui::Ui, app: &App) {
        if app.rows.is_empty() {
            super::empty_hint(ui);
            return;
        }

        ui.horizontal(|ui| {
            ui.label(format!("{} reviews", app.rows.len()));
            if let Some(a) = &app.analysis {
                if !a.issues.is_empty() {
                    ui.colored_label(
                        ui.visuals().warn_fg_color,
                        format!("{} value(s) out of range", a.issues.len()),
                    );
                }
            }
        });

        data_table::draw(ui, "reviews_table", &app.headers, &app.rows, WIDTHS, NUMERIC);
    }
}
