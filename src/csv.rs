// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Split off the first row if it matches `expected` (case-insensitive, first cell).
pub fn detect_headers(mut rows: Vec<Vec<String>>, expected: &str) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let is_header = rows
        .first()
        .and_then(|r| r.first())
        .is_some_and(|c| c.eq_ignore_ascii_case(expected));
    if is_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full export text (Copy/Export).
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_survive() {
        let rows = vec![vec![s!("Hotel Chocolat, Ltd"), s!("3.5")]];
        let text = to_export_string(&[s!("Company"), s!("Rating")], &rows, true, ',');
        assert_eq!(text, "Company,Rating\n\"Hotel Chocolat, Ltd\",3.5\n");

        let (h, back) = detect_headers(parse_rows(&text, ','), "company");
        assert_eq!(h.unwrap()[1], "Rating");
        assert_eq!(back, rows);
    }

    #[test]
    fn tsv_without_headers() {
        let rows = vec![vec![s!("Soma"), s!("3.75"), s!("70")]];
        let text = to_export_string(&[s!("Company")], &rows, false, '\t');
        assert_eq!(text, "Soma\t3.75\t70\n");
    }

    #[test]
    fn crlf_and_blank_lines() {
        let rows = parse_rows("a,b\r\n\r\nc,d", ',');
        assert_eq!(rows, vec![vec![s!("a"), s!("b")], vec![s!("c"), s!("d")]]);
    }
}
