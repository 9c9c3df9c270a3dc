// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,fetch,...}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod fetch;   // src/gui/actions/fetch.rs

pub use copy::copy;
pub use export::{export, save_plots};
pub use fetch::{fetch, load_cache};

use crate::gui::app::App;

/// Push the output text field into ExportOptions if the user edited it.
pub(super) fn apply_out_path(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
        logd!("UI: out path applied → {}", app.state.options.export.out_path().display());
    }
}
