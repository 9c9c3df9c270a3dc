// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use cacao_scrape::{analysis, core::html, specs::reviews};

fn load_sample() -> String {
    // The live page has ~1800 rows; repeat the fixture body to get close.
    let page = include_str!("../tests/fixtures/cacao_sample.html");
    let (head, rest) = page.split_once("</tr>").expect("fixture has a header row");
    let (body, tail) = rest.split_once("</table>").expect("fixture has a table");
    format!("{head}</tr>{}</table>{tail}", body.repeat(120))
}

fn bench_extract(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("parse_document", |b| {
        b.iter(|| black_box(html::parse_document(black_box(&doc))))
    });

    let parsed = html::parse_document(&doc);
    c.bench_function("extract_columns", |b| {
        b.iter(|| reviews::extract_columns(black_box(&parsed)).map(|c| c.ratings.len()))
    });

    let table = reviews::parse_reviews(&doc).expect("sample parses");
    c.bench_function("top_companies", |b| {
        b.iter(|| analysis::top_companies(black_box(&table), 10).len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
