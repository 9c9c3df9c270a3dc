// tests/extract_reviews.rs
//
// Extraction against a saved copy of the review page.
//
use cacao_scrape::error::ScrapeError;
use cacao_scrape::specs::reviews::{extract_columns, parse_reviews};
use cacao_scrape::core::html::parse_document;

const PAGE: &str = include_str!("fixtures/cacao_sample.html");

fn row(company: &str, pct: &str, rating: &str) -> String {
    format!(
        r#"<tr><td class="Company">{company}</td><td class="CocoaPercent">{pct}</td><td class="Rating">{rating}</td></tr>"#
    )
}

fn page(rows: &[String]) -> String {
    let header = row("Company", "Cocoa Percent", "Rating");
    format!("<html><body><table>{}{}</table></body></html>", header, rows.join(""))
}

#[test]
fn columns_are_aligned_and_header_is_skipped() {
    let cols = extract_columns(&parse_document(PAGE)).unwrap();
    assert_eq!(cols.ratings.len(), 15);
    assert_eq!(cols.companies.len(), 15);
    assert_eq!(cols.cocoa_percents.len(), 15);

    assert_eq!(cols.companies[0], "A. Morin");
    assert_eq!(cols.ratings[0], 3.75);
    assert_eq!(cols.cocoa_percents[0], 63.0);
    assert!(!cols.companies.iter().any(|c| c.starts_with("Company")));
}

#[test]
fn company_location_is_not_a_company() {
    let cols = extract_columns(&parse_document(PAGE)).unwrap();
    assert!(!cols.companies.iter().any(|c| c == "France"));
}

#[test]
fn table_values_are_in_range() {
    let table = parse_reviews(PAGE).unwrap();
    assert_eq!(table.len(), 15);
    assert!(table.validate().is_empty());
    assert!(table.ratings().iter().all(|r| (1.0..=5.0).contains(r)));
    assert!(table.cocoa_percents().unwrap().iter().all(|c| (0.0..=100.0).contains(c)));
    assert_eq!(table.records().nth(12).unwrap().cocoa_percent, 100.0);
}

#[test]
fn malformed_rating_aborts_with_row() {
    let html = page(&[row("Soma", "70%", "3.5"), row("Bonnat", "75%", "N/A")]);
    match parse_reviews(&html) {
        Err(ScrapeError::Parse { column, row, text }) => {
            assert_eq!(column, "Rating");
            assert_eq!(row, 2);
            assert_eq!(text, "N/A");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn malformed_percent_aborts() {
    let html = page(&[row("Soma", "seventy", "3.5")]);
    assert!(matches!(
        parse_reviews(&html),
        Err(ScrapeError::Parse { column: "CocoaPercent", row: 1, .. })
    ));
}

#[test]
fn misaligned_columns_are_rejected() {
    let mut html = page(&[row("Soma", "70%", "3.5")]);
    html = html.replace("</table>", r#"<tr><td class="Rating">4.0</td></tr></table>"#);
    assert!(matches!(parse_reviews(&html), Err(ScrapeError::LengthMismatch { .. })));
}

#[test]
fn page_without_table_is_an_error() {
    let html = "<html><body><p>Moved</p></body></html>";
    assert!(matches!(parse_reviews(html), Err(ScrapeError::MissingColumn(_))));
}
