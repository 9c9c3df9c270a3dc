// src/gui/pages/ratings.rs
use eframe::egui::{self, Rect, Stroke};

use crate::{
    config::{options::PageKind, state::AppState},
    gui::{app::App, components::chart::{self, Labels, BAR_FILL}},
};

use super::Page;

pub struct RatingsPage;
pub static PAGE: RatingsPage = RatingsPage;

impl Page for RatingsPage {
    fn kind(&self) -> PageKind { PageKind::Ratings }
    fn title(&self) -> &'static str { "Ratings" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let before = state.options.analysis.bins;
        ui.horizontal(|ui| {
            ui.label("Bins:");
            ui.add(egui::DragValue::new(&mut state.options.analysis.bins).range(1..=50));
        });
        let changed = state.options.analysis.bins != before;
        if changed {
            logf!("UI: histogram bins → {}", state.options.analysis.bins);
        }
        changed
    }

    fn draw(&self, ui: &mut egui::Ui, app: &App) {
        let Some(a) = &app.analysis else {
            super::empty_hint(ui);
            return;
        };
        let h = &a.histogram;
        if h.bins() == 0 {
            super::empty_hint(ui);
            return;
        }

        let y_max = h.max_count().max(1) as f64 * 1.05;
        let (painter, frame) = chart::frame(
            ui,
            Labels { title: "Distribution of Chocolate Ratings", x: "Rating", y: "Count" },
            (h.lo, h.hi),
            (0.0, y_max),
        );

        let edges = h.edges();
        let edge = Stroke::new(1.0, ui.visuals().extreme_bg_color);
        let hover = frame.response.hover_pos();

        for (i, &count) in h.counts.iter().enumerate() {
            let rect = Rect::from_two_pos(
                frame.to_screen(edges[i], 0.0),
                frame.to_screen(edges[i + 1], count as f64),
            );
            painter.rect_filled(rect, 0.0, BAR_FILL);
            painter.rect_stroke(rect, 0.0, edge, egui::StrokeKind::Inside);

            if hover.is_some_and(|p| rect.x_range().contains(p.x)) {
                frame.response.clone().on_hover_text(format!(
                    "[{:.2}, {:.2}{}  {} review(s)",
                    edges[i],
                    edges[i + 1],
                    if i + 1 == h.bins() { ']' } else { ')' },
                    count
                ));
            }
        }
    }
}
