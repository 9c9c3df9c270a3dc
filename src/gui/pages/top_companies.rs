// src/gui/pages/top_companies.rs
use eframe::egui::{self, Align2, FontId, Rect, Vec2};

use crate::{
    config::{options::PageKind, state::AppState},
    gui::{app::App, components::{chart::BAR_FILL, data_table}},
};

use super::Page;

pub struct TopCompaniesPage;
pub static PAGE: TopCompaniesPage = TopCompaniesPage;

const HEADERS: &[&str] = &["#", "Company", "Mean rating", "Reviews"];
const WIDTHS: &[f32] = &[30.0, 220.0, 100.0, 70.0];
const NUMERIC: &[usize] = &[0, 2, 3];
const ROW_H: f32 = 22.0;

impl Page for TopCompaniesPage {
    fn kind(&self) -> PageKind { PageKind::TopCompanies }
    fn title(&self) -> &'static str { "Top companies" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let before = state.options.analysis.top_n;
        ui.horizontal(|ui| {
            ui.label("Show top:");
            ui.add(egui::DragValue::new(&mut state.options.analysis.top_n).range(1..=100));
        });
        let changed = state.options.analysis.top_n != before;
        if changed {
            logf!("UI: top_n → {}", state.options.analysis.top_n);
        }
        changed
    }

    fn draw(&self, ui: &mut egui::Ui, app: &App) {
        let Some(a) = &app.analysis else {
            super::empty_hint(ui);
            return;
        };

        ui.columns(2, |cols| {
            let headers: Vec<String> = HEADERS.iter().map(|h| s!(*h)).collect();
            let rows: Vec<Vec<String>> = a
                .top
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    vec![(i + 1).to_string(), c.company.clone(), format!("{:.3}", c.mean), c.reviews.to_string()]
                })
                .collect();
            data_table::draw(&mut cols[0], "top_companies", &headers, &rows, WIDTHS, NUMERIC);

            // Horizontal bars on the 1..5 rating scale
            let ui = &mut cols[1];
            let size = Vec2::new(ui.available_width(), ROW_H * a.top.len() as f32 + 8.0);
            let (resp, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let area = resp.rect;
            let text = ui.visuals().strong_text_color();
            let scale = |v: f64| {
                let t = ((v - 1.0) / 4.0).clamp(0.0, 1.0) as f32;
                area.left() + t * area.width()
            };

            for (i, c) in a.top.iter().enumerate() {
                let top = area.top() + 4.0 + i as f32 * ROW_H;
                let bar = Rect::from_min_max(
                    egui::pos2(area.left(), top + 2.0),
                    egui::pos2(scale(c.mean), top + ROW_H - 2.0),
                );
                painter.rect_filled(bar, 2.0, BAR_FILL.linear_multiply(0.8));
                painter.text(
                    egui::pos2(area.left() + 4.0, bar.center().y),
                    Align2::LEFT_CENTER,
                    format!("{}  {:.2}", c.company, c.mean),
                    FontId::proportional(12.0),
                    text,
                );
            }
        });
    }
}
