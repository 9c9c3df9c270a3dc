// src/gui/pages/cocoa.rs
use eframe::egui::{self, Color32, Shape, Stroke};

use crate::{
    config::{options::PageKind, state::AppState},
    gui::{app::App, components::chart::{self, Labels, BAR_FILL, FIT_LINE}},
    plot::padded_range,
};

use super::Page;

pub struct CocoaPage;
pub static PAGE: CocoaPage = CocoaPage;

impl Page for CocoaPage {
    fn kind(&self) -> PageKind { PageKind::CocoaVsRating }
    fn title(&self) -> &'static str { "Cocoa vs rating" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        // display-only toggle; no re-analysis
        ui.checkbox(&mut state.gui.show_fit, "Show best-fit line");
        false
    }

    fn draw(&self, ui: &mut egui::Ui, app: &App) {
        let (Some(table), Some(a)) = (&app.table, &app.analysis) else {
            super::empty_hint(ui);
            return;
        };

        let fit = &a.fit;
        ui.horizontal(|ui| {
            ui.label(format!("Rating = {:.5} × Percentage {:+.5}", fit.slope, fit.intercept));
            if let Some(r) = fit.r {
                ui.label(format!("r = {:.4}", r));
            }
        });

        let points: Vec<(f64, f64)> = table.records().map(|r| (r.cocoa_percent, r.rating)).collect();
        let x = padded_range(points.iter().map(|p| p.0), 0.05);
        let y = padded_range(points.iter().map(|p| p.1), 0.05);

        let (painter, frame) = chart::frame(
            ui,
            Labels { title: "Ratings vs Percentage of Cocoa", x: "Percentage", y: "Rating" },
            x,
            y,
        );

        let dot = Color32::from_rgba_unmultiplied(BAR_FILL.r(), BAR_FILL.g(), BAR_FILL.b(), 160);
        for &(px, py) in &points {
            painter.circle_filled(frame.to_screen(px, py), 3.0, dot);
        }

        if app.state.gui.show_fit {
            let (x0, x1) = points
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.0), hi.max(p.0)));
            if x0.is_finite() {
                let line = [frame.to_screen(x0, fit.eval(x0)), frame.to_screen(x1, fit.eval(x1))];
                painter.extend(Shape::dashed_line(&line, Stroke::new(2.0, FIT_LINE), 10.0, 6.0));
            }
        }

        if let Some(p) = frame.response.hover_pos() {
            let (hx, hy) = frame.from_screen(p);
            frame.response.clone().on_hover_text(format!("{:.1}%  {:.2}", hx, hy));
        }
    }
}
