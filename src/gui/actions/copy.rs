// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = &app.table else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    let txt = to_export_string(
        &table.headers(),
        &table.to_rows(),
        export.include_headers,
        export.delim(),
    );
    logf!("Copy: rows={} format={:?}", table.len(), export.format);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
