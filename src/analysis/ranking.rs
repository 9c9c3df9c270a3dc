// src/analysis/ranking.rs
use crate::table::{CompanyMean, ReviewTable};

/// The `n` companies with the highest mean rating, best first.
/// Equal means keep group order (company name), so the result is deterministic.
pub fn top_companies(table: &ReviewTable, n: usize) -> Vec<CompanyMean> {
    let mut means = table.mean_by_company();
    // stable: ties stay alphabetical
    means.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    means.truncate(n);
    means
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_stay_alphabetical() {
        let table = ReviewTable::from_columns(
            vec![s!("Zotter"), s!("Bonnat"), s!("Amedei"), s!("Pralus")],
            vec![3.5, 3.5, 4.0, 3.5],
        )
        .unwrap();
        let top = top_companies(&table, 3);
        let names: Vec<&str> = top.iter().map(|c| c.company.as_str()).collect();
        assert_eq!(names, vec!["Amedei", "Bonnat", "Pralus"]);
    }

    #[test]
    fn fewer_groups_than_n() {
        let table = ReviewTable::from_columns(vec![s!("A"), s!("A")], vec![2.0, 4.0]).unwrap();
        let top = top_companies(&table, 10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].mean, 3.0);
    }
}
