// src/table.rs
//
// Column-oriented review table.
//
// Built from aligned columns (company, rating) and extended later with the
// cocoa percentage column. Every column shares the source row order; the
// lengths are checked whenever a column is attached.

use std::collections::BTreeMap;

use crate::config::consts::*;
use crate::core::sanitize::{fmt_number, parse_number, parse_percent};
use crate::error::ScrapeError;

pub const COL_COMPANY: &str = "Company";
pub const COL_RATING: &str = "Rating";
pub const COL_COCOA: &str = "CocoaPercentage";

/// One row of the table.
#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub company: String,
    pub rating: f64,
    pub cocoa_percent: f64,
}

/// Mean rating of one company group.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyMean {
    pub company: String,
    pub mean: f64,
    pub reviews: usize,
}

/// A value outside its documented range.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeIssue {
    /// 0-based row index
    pub row: usize,
    pub column: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewTable {
    company: Vec<String>,
    rating: Vec<f64>,
    cocoa_percent: Option<Vec<f64>>,
}

impl ReviewTable {
    pub fn from_columns(company: Vec<String>, rating: Vec<f64>) -> Result<Self, ScrapeError> {
        check_len(COL_COMPANY, company.len(), COL_RATING, rating.len())?;
        Ok(Self { company, rating, cocoa_percent: None })
    }

    /// Attach (or replace) the cocoa percentage column.
    pub fn set_cocoa_percent(&mut self, values: Vec<f64>) -> Result<(), ScrapeError> {
        check_len(COL_COMPANY, self.company.len(), COL_COCOA, values.len())?;
        self.cocoa_percent = Some(values);
        Ok(())
    }

    pub fn len(&self) -> usize { self.company.len() }
    pub fn is_empty(&self) -> bool { self.company.is_empty() }

    pub fn companies(&self) -> &[String] { &self.company }
    pub fn ratings(&self) -> &[f64] { &self.rating }
    pub fn cocoa_percents(&self) -> Option<&[f64]> { self.cocoa_percent.as_deref() }

    /// Full records; empty until the cocoa column is attached.
    pub fn records(&self) -> impl Iterator<Item = Review> + '_ {
        let cocoa = self.cocoa_percent.as_deref().unwrap_or(&[]);
        self.company
            .iter()
            .zip(&self.rating)
            .zip(cocoa)
            .map(|((company, &rating), &cocoa_percent)| Review {
                company: company.clone(),
                rating,
                cocoa_percent,
            })
    }

    /// Group by company and average the ratings. Groups come out sorted by name.
    pub fn mean_by_company(&self) -> Vec<CompanyMean> {
        let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for (company, &rating) in self.company.iter().zip(&self.rating) {
            let g = groups.entry(company.as_str()).or_insert((0.0, 0));
            g.0 += rating;
            g.1 += 1;
        }
        groups
            .into_iter()
            .map(|(company, (sum, n))| CompanyMean {
                company: s!(company),
                mean: sum / n as f64,
                reviews: n,
            })
            .collect()
    }

    /// Every rating outside [1,5] and cocoa percentage outside [0,100].
    pub fn validate(&self) -> Vec<RangeIssue> {
        let mut issues = Vec::new();
        for (row, &v) in self.rating.iter().enumerate() {
            if !(RATING_MIN..=RATING_MAX).contains(&v) {
                issues.push(RangeIssue { row, column: COL_RATING, value: v });
            }
        }
        for (row, &v) in self.cocoa_percent.iter().flatten().enumerate() {
            if !(COCOA_MIN..=COCOA_MAX).contains(&v) {
                issues.push(RangeIssue { row, column: COL_COCOA, value: v });
            }
        }
        issues
    }

    /* ---------- string projection (display / export / cache) ---------- */

    pub fn headers(&self) -> Vec<String> {
        let mut h = vec![s!(COL_COMPANY), s!(COL_RATING)];
        if self.cocoa_percent.is_some() {
            h.push(s!(COL_COCOA));
        }
        h
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        (0..self.len())
            .map(|i| {
                let mut row = vec![self.company[i].clone(), fmt_number(self.rating[i])];
                if let Some(c) = &self.cocoa_percent {
                    row.push(fmt_number(c[i]));
                }
                row
            })
            .collect()
    }

    /// Rebuild from the string projection (the cache format).
    /// A third column, when present, is the cocoa percentage.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, ScrapeError> {
        let mut company = Vec::with_capacity(rows.len());
        let mut rating = Vec::with_capacity(rows.len());
        let mut cocoa = Vec::with_capacity(rows.len());
        let has_cocoa = rows.first().is_some_and(|r| r.len() > 2);

        for (i, row) in rows.iter().enumerate() {
            let cell = |ix: usize| row.get(ix).map(String::as_str).unwrap_or("");
            company.push(s!(cell(0)));
            rating.push(parse_number(cell(1)).ok_or_else(|| ScrapeError::Parse {
                column: COL_RATING,
                row: i + 1,
                text: s!(cell(1)),
            })?);
            if has_cocoa {
                cocoa.push(parse_percent(cell(2)).ok_or_else(|| ScrapeError::Parse {
                    column: COL_COCOA,
                    row: i + 1,
                    text: s!(cell(2)),
                })?);
            }
        }

        let mut table = Self::from_columns(company, rating)?;
        if has_cocoa {
            table.set_cocoa_percent(cocoa)?;
        }
        Ok(table)
    }
}

fn check_len(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> Result<(), ScrapeError> {
    if left_len == right_len {
        Ok(())
    } else {
        Err(ScrapeError::LengthMismatch { left, left_len, right, right_len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ReviewTable {
        let mut t = ReviewTable::from_columns(
            vec![s!("Soma"), s!("Amedei"), s!("Soma")],
            vec![3.75, 4.0, 3.25],
        )
        .unwrap();
        t.set_cocoa_percent(vec![70.0, 64.0, 72.0]).unwrap();
        t
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = ReviewTable::from_columns(vec![s!("A")], vec![]).unwrap_err();
        assert!(matches!(err, ScrapeError::LengthMismatch { left_len: 1, right_len: 0, .. }));

        let mut t = ReviewTable::from_columns(vec![s!("A")], vec![3.0]).unwrap();
        assert!(t.set_cocoa_percent(vec![70.0, 71.0]).is_err());
        assert!(t.cocoa_percents().is_none());
    }

    #[test]
    fn group_means_sorted_by_company() {
        let means = table().mean_by_company();
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].company, "Amedei");
        assert_eq!(means[1].company, "Soma");
        assert_eq!(means[1].mean, 3.5);
        assert_eq!(means[1].reviews, 2);
    }

    #[test]
    fn records_need_cocoa_column() {
        let bare = ReviewTable::from_columns(vec![s!("A")], vec![3.0]).unwrap();
        assert_eq!(bare.records().count(), 0);
        let recs: Vec<Review> = table().records().collect();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[1].company, "Amedei");
        assert_eq!(recs[1].cocoa_percent, 64.0);
    }

    #[test]
    fn validate_flags_out_of_range() {
        let mut t = ReviewTable::from_columns(vec![s!("A"), s!("B")], vec![0.5, 4.0]).unwrap();
        t.set_cocoa_percent(vec![70.0, 140.0]).unwrap();
        let issues = t.validate();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], RangeIssue { row: 0, column: COL_RATING, value: 0.5 });
        assert_eq!(issues[1].column, COL_COCOA);
        assert_eq!(issues[1].row, 1);
        assert!(table().validate().is_empty());
    }

    #[test]
    fn rows_rebuild_the_table() {
        let t = table();
        let rows = t.to_rows();
        assert_eq!(rows[0], vec!["Soma", "3.75", "70"]);
        assert_eq!(ReviewTable::from_rows(&rows).unwrap(), t);
    }
}
