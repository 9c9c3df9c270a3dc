// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::ScrapeError;

pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

pub fn class_selector(class: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(&join!(".", class)).map_err(|_| ScrapeError::Selector(join!(".", class)))
}

/// Visible text of an element, whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of every element carrying `class`, in document order.
pub fn select_class(doc: &Html, class: &str) -> Result<Vec<String>, ScrapeError> {
    let sel = class_selector(class)?;
    Ok(doc.select(&sel).map(text_of).collect())
}

/// Like `select_class`, minus the first `skip` matches (the table header).
pub fn column_cells(doc: &Html, class: &str, skip: usize) -> Result<Vec<String>, ScrapeError> {
    let mut cells = select_class(doc, class)?;
    let skip = skip.min(cells.len());
    cells.drain(..skip);
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<table>
        <tr><td class="Name">Name</td><td class="Score">Score</td><td class="NameLocation">Where</td></tr>
        <tr><td class="Name"> Alpha <b>Co</b></td><td class="Score">3</td><td class="NameLocation">X</td></tr>
        <tr><td class="Name">Beta</td><td class="Score">4</td><td class="NameLocation">Y</td></tr>
    </table>"#;

    #[test]
    fn select_by_exact_class_only() {
        let doc = parse_document(DOC);
        let names = select_class(&doc, "Name").unwrap();
        assert_eq!(names, vec!["Name", "Alpha Co", "Beta"]);
    }

    #[test]
    fn header_is_skipped() {
        let doc = parse_document(DOC);
        assert_eq!(column_cells(&doc, "Score", 1).unwrap(), vec!["3", "4"]);
    }

    #[test]
    fn missing_class_is_empty_not_error() {
        let doc = parse_document(DOC);
        assert!(column_cells(&doc, "Nope", 1).unwrap().is_empty());
    }
}
