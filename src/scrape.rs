// src/scrape.rs
use std::{error::Error, fs};

use crate::{
    config::options::{Source, SourceOptions},
    progress::Progress,
    specs::reviews,
    store,
    table::ReviewTable,
};

/// Fetch (or read) the review page and extract the table.
/// Always returns the full table: company, rating, cocoa percentage.
pub fn collect_reviews(
    source: &SourceOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ReviewTable, Box<dyn Error>> {
    let markup = match &source.source {
        Source::Url(url) => {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Fetching {url}…"));
            }
            logf!("Scrape: GET {}", url);
            crate::core::net::http_get(url)?
        }
        Source::HtmlFile(path) => {
            logf!("Scrape: reading {}", path.display());
            fs::read_to_string(path)
                .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?
        }
    };
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Fetched page");
    }

    let table = reviews::parse_reviews(&markup)?;
    logf!("Scrape: extracted {} reviews", table.len());
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("Extracted {} reviews", table.len()));
    }

    for issue in table.validate() {
        loge!(
            "Scrape: {} row {} out of range: {}",
            issue.column,
            issue.row + 1,
            issue.value
        );
    }

    if source.use_cache {
        // best-effort; a read-only working dir shouldn't kill the run
        match store::save_dataset(&table) {
            Ok(p) => logf!("Cache: Saved reviews → {}", p.display()),
            Err(e) => loge!("Cache: Save failed: {}", e),
        }
    }

    Ok(table)
}
