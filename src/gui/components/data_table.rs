// src/gui/components/data_table.rs
//
// Draws a read-only table from headers + string rows.
// Purely a view; numeric columns are centered.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

pub fn draw(
    ui: &mut egui::Ui,
    id_salt: &str,
    headers: &[String],
    rows: &[Vec<String>],
    widths: &[f32],
    numeric: &[usize],
) {
    let cols = headers.len().max(rows.first().map(|r| r.len()).unwrap_or(0));

    let mut table = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .min_scrolled_height(0.0);
    for ci in 0..cols {
        let w = widths.get(ci).copied().unwrap_or(80.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    let text = headers.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                    let label = egui::Label::new(RichText::new(text).strong()).selectable(false);
                    if numeric.contains(&ci) {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(data) = rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = data.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if numeric.contains(&ci) {
                            ui.centered_and_justified(|ui| { ui.label(cell); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });
}
