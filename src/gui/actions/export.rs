// src/gui/actions/export.rs
use std::path::{Path, PathBuf};

use crate::{file, gui::app::App, runner};

pub fn export(app: &mut App) {
    if app.table.is_none() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's no data");
        return;
    }

    super::apply_out_path(app);

    let Some(table) = &app.table else { return };
    match file::export_table(&app.state.options.export, table) {
        Ok(p) => {
            app.out_path_text = p.to_string_lossy().into_owned();
            app.status(format!("Exported {} rows → {}", table.len(), p.display()));
        }
        Err(e) => {
            loge!("Export: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

/// PNG plots go next to the export file.
pub fn save_plots(app: &mut App) {
    super::apply_out_path(app);

    let (Some(table), Some(analysis)) = (&app.table, &app.analysis) else {
        app.status("Nothing to plot");
        return;
    };

    let out = app.state.options.export.out_path();
    let dir: PathBuf = out.parent().map(Path::to_path_buf).unwrap_or_default();

    match runner::write_plots(&dir, table, analysis) {
        Ok(paths) => {
            let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            app.status(format!("Saved {}", names.join(", ")));
        }
        Err(e) => {
            loge!("Plots: {}", e);
            app.status(format!("Plot error: {e}"));
        }
    }
}
