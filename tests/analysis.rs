// tests/analysis.rs
//
// The three analyses over the saved review page.
//
use cacao_scrape::analysis::{histogram, linear_fit, top_companies};
use cacao_scrape::specs::reviews::parse_reviews;
use cacao_scrape::table::ReviewTable;

const PAGE: &str = include_str!("fixtures/cacao_sample.html");

fn table() -> ReviewTable {
    parse_reviews(PAGE).unwrap()
}

fn close(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() < eps }

#[test]
fn top_ten_sorted_descending() {
    let top = top_companies(&table(), 10);
    assert_eq!(top.len(), 10);
    assert!(top.windows(2).all(|w| w[0].mean >= w[1].mean));

    let names: Vec<&str> = top.iter().map(|c| c.company.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Amedei", "Domori", "Bonnat", "Pralus", "Soma",
            "A. Morin", "Coppeneur", "Valrhona", "Cacao Sampaka", "Hershey",
        ]
    );
    assert_eq!(top[0].mean, 4.5);
    assert_eq!(top[0].reviews, 2);
    assert_eq!(top[5].mean, 3.25);
    assert!(!names.contains(&"Zotter"));
}

#[test]
fn group_count_exceeds_ranking() {
    let t = table();
    assert_eq!(t.mean_by_company().len(), 12);
    assert_eq!(top_companies(&t, 50).len(), 12);
}

#[test]
fn histogram_counts_every_rating() {
    let h = histogram(table().ratings(), 10);
    assert_eq!(h.bins(), 10);
    assert_eq!(h.total(), 15);
    assert_eq!((h.lo, h.hi), (1.0, 5.0));
    assert_eq!(h.counts[0], 1); // 1.0
    assert_eq!(h.counts[6], 4); // 3.5, 3.5, 3.75, 3.75
    assert_eq!(h.counts[8], 0);
    assert_eq!(h.counts[9], 1); // 5.0 closes the last bin
}

#[test]
fn cocoa_fit_slopes_down() {
    let t = table();
    let fit = linear_fit(t.cocoa_percents().unwrap(), t.ratings()).unwrap();
    assert_eq!(fit.n, 15);
    assert!(close(fit.slope, -0.060059202, 1e-6));
    assert!(close(fit.intercept, 7.520357291, 1e-6));
    assert!(close(fit.r.unwrap(), -0.678225516, 1e-6));
}
