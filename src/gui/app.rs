// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        consts::DEFAULT_URL,
        options::{PageKind, Source},
        state::AppState,
    },
    runner::{self, Analysis},
    store,
    table::ReviewTable,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Cacao Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // source/output text fields (mapped into options on use)
    pub url_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // canonical data + derived analysis
    pub table: Option<ReviewTable>,
    pub analysis: Option<Analysis>,

    // display rows for the Reviews tab
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,
    pub has_cache: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let url_text = match &state.options.source.source {
            Source::Url(u) => u.clone(),
            Source::HtmlFile(_) => s!(DEFAULT_URL),
        };
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let has_cache = store::has_dataset();

        let mut app = Self {
            state,
            url_text,
            out_path_text,
            out_path_dirty: false,
            table: None,
            analysis: None,
            headers: Vec::new(),
            rows: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            has_cache,
        };

        // canonical cache from disk
        if has_cache {
            match store::load_dataset() {
                Ok(table) => {
                    logf!("Cache: Loaded reviews (rows={})", table.len());
                    app.load_table(table, "Loaded local data");
                }
                Err(e) => loge!("Cache: Invalid reviews cache, ignoring ({})", e),
            }
        }

        logf!("Init: page={:?}", app.state.gui.current_page);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.state.gui.current_page }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(self.current_page_kind()) }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Replace the canonical table and rebuild everything derived from it.
    pub fn set_table(&mut self, table: ReviewTable) {
        self.headers = table.headers();
        self.rows = display_rows(&table);
        self.table = Some(table);
        self.reanalyze();
    }

    /// `set_table`, reporting `msg` unless the analysis fails.
    /// An analysis error stays on the status line.
    pub fn load_table<T: Into<String>>(&mut self, table: ReviewTable, msg: T) {
        self.status(msg);
        self.set_table(table);
    }

    /// Recompute the analyses with the current options.
    pub fn reanalyze(&mut self) {
        let Some(table) = &self.table else { return };
        match runner::analyze(table, &self.state.options.analysis) {
            Ok(a) => {
                logd!("Analyze: bins={} top={}", a.histogram.bins(), a.top.len());
                self.analysis = Some(a);
            }
            Err(e) => {
                loge!("Analyze: {}", e);
                self.analysis = None;
                self.status(format!("Error: {e}"));
            }
        }
    }
}

/// Reviews tab formatting: cocoa shown with its percent sign.
fn display_rows(table: &ReviewTable) -> Vec<Vec<String>> {
    let mut rows = table.to_rows();
    if table.cocoa_percents().is_some() {
        for r in &mut rows {
            if let Some(c) = r.get_mut(2) {
                c.push('%');
            }
        }
    }
    rows
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            super::components::source_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            if page.draw_controls(ui, &mut self.state) {
                self.reanalyze();
            }
            page.draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(companies: &[&str], ratings: &[f64], cocoa: &[f64]) -> ReviewTable {
        let mut t = ReviewTable::from_columns(
            companies.iter().map(|c| s!(*c)).collect(),
            ratings.to_vec(),
        )
        .unwrap();
        t.set_cocoa_percent(cocoa.to_vec()).unwrap();
        t
    }

    #[test]
    fn analysis_error_survives_load_status() {
        let mut app = App::new(AppState::default());
        app.load_table(table(&["Soma"], &[3.5], &[70.0]), "Loaded local data");
        assert!(app.analysis.is_none());
        assert!(app.status_text().starts_with("Error:"), "{}", app.status_text());
        assert_eq!(app.rows.len(), 1);
    }

    #[test]
    fn load_status_shown_when_analysis_succeeds() {
        let mut app = App::new(AppState::default());
        app.load_table(table(&["Soma", "Bonnat"], &[3.5, 4.0], &[70.0, 75.0]), "Loaded local data");
        assert!(app.analysis.is_some());
        assert_eq!(app.status_text(), "Loaded local data");
        assert_eq!(app.rows[0][2], "70%");
    }
}
