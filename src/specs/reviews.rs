// src/specs/reviews.rs
//
// The review table page. Every cell carries its column name as a CSS class
// (`<td class="Rating">3.75</td>`); the first cell of each class is the header.

use scraper::Html;

use crate::config::consts::{CLASS_COCOA, CLASS_COMPANY, CLASS_RATING, HEADER_CELLS};
use crate::core::{html, net};
use crate::core::sanitize::{parse_number, parse_percent};
use crate::error::ScrapeError;
use crate::table::ReviewTable;

/// The three columns as collected, before alignment into a table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewColumns {
    pub ratings: Vec<f64>,
    pub companies: Vec<String>,
    pub cocoa_percents: Vec<f64>,
}

impl ReviewColumns {
    /// Company + rating first, cocoa percentage attached afterwards.
    pub fn into_table(self) -> Result<ReviewTable, ScrapeError> {
        let mut table = ReviewTable::from_columns(self.companies, self.ratings)?;
        table.set_cocoa_percent(self.cocoa_percents)?;
        Ok(table)
    }
}

pub fn fetch(url: &str) -> Result<ReviewTable, ScrapeError> {
    let markup = net::http_get(url)?;
    parse_reviews(&markup)
}

pub fn parse_reviews(markup: &str) -> Result<ReviewTable, ScrapeError> {
    let doc = html::parse_document(markup);
    extract_columns(&doc)?.into_table()
}

pub fn extract_columns(doc: &Html) -> Result<ReviewColumns, ScrapeError> {
    let ratings = numeric_column(doc, CLASS_RATING, parse_number)?;
    let companies = html::column_cells(doc, CLASS_COMPANY, HEADER_CELLS)?;
    let cocoa_percents = numeric_column(doc, CLASS_COCOA, parse_percent)?;

    if ratings.is_empty() && companies.is_empty() {
        return Err(ScrapeError::MissingColumn(CLASS_RATING));
    }
    logd!(
        "Spec: ratings={} companies={} cocoa={}",
        ratings.len(),
        companies.len(),
        cocoa_percents.len()
    );

    Ok(ReviewColumns { ratings, companies, cocoa_percents })
}

/// One class column, header dropped, each cell parsed. First bad cell aborts.
fn numeric_column(
    doc: &Html,
    class: &'static str,
    parse: fn(&str) -> Option<f64>,
) -> Result<Vec<f64>, ScrapeError> {
    html::column_cells(doc, class, HEADER_CELLS)?
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            parse(&text).ok_or(ScrapeError::Parse { column: class, row: i + 1, text })
        })
        .collect()
}
