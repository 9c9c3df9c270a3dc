// src/gui/actions/fetch.rs
use crate::{
    config::options::Source,
    gui::{app::App, progress::GuiProgress},
    progress::Progress,
    scrape,
    store,
};

pub fn fetch(app: &mut App) {
    let url = app.url_text.trim().to_string();
    if url.is_empty() {
        app.status("Enter a URL first");
        return;
    }
    app.state.options.source.source = Source::Url(url);

    logf!("Fetch: Begin source={:?}", app.state.options.source.source);

    let mut prog = GuiProgress::new(app.status.clone());
    prog.begin(2);

    // → This is where the scrape happens ←
    let res = scrape::collect_reviews(&app.state.options.source, Some(&mut prog));

    match res {
        Ok(table) => {
            logf!("Fetch: OK rows={}", table.len());
            let issues = table.validate().len();
            prog.finish();
            if issues > 0 {
                app.load_table(table, format!("Ready ({issues} value(s) out of range)"));
            } else {
                app.load_table(table, "Ready");
            }
            app.has_cache = store::has_dataset();
        }
        Err(e) => {
            loge!("Fetch: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn load_cache(app: &mut App) {
    match store::load_dataset() {
        Ok(table) => {
            logf!("Cache: Loaded reviews (rows={})", table.len());
            app.load_table(table, "Loaded local data");
        }
        Err(e) => {
            loge!("Cache: Load failed: {}", e);
            app.status(format!("Cache error: {e}"));
        }
    }
}
