// tests/run_pipeline.rs
//
// End-to-end: saved page → table → analyses → export + plots, no network.
//
use std::fs;
use std::path::PathBuf;

use cacao_scrape::config::options::{AppOptions, ExportFormat, Source};
use cacao_scrape::progress::{NullProgress, Progress};
use cacao_scrape::runner;
use cacao_scrape::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cacao_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cacao_sample.html")
}

fn offline_opts() -> AppOptions {
    let mut opts = AppOptions::default();
    opts.source.source = Source::HtmlFile(fixture());
    opts.source.use_cache = false;
    opts
}

#[test]
fn run_writes_export_and_plots() {
    let dir = tmp_dir("run");
    let mut opts = offline_opts();
    opts.export.enabled = true;
    opts.export.format = ExportFormat::Tsv;
    opts.export.set_path(dir.join("reviews").to_str().unwrap());
    opts.analysis.plots_dir = Some(dir.join("plots"));

    let summary = runner::run(&opts, Some(&mut NullProgress)).unwrap();
    assert_eq!(summary.table.len(), 15);
    assert_eq!(summary.analysis.top.len(), 10);
    assert_eq!(summary.files_written.len(), 3);

    let export = &summary.files_written[0];
    assert!(export.to_string_lossy().ends_with("reviews.tsv"));
    let text = fs::read_to_string(export).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Company\tRating\tCocoaPercentage"));
    assert_eq!(lines.next(), Some("A. Morin\t3.75\t63"));
    assert_eq!(text.lines().count(), 16);

    for png in &summary.files_written[1..] {
        let img = image::open(png).unwrap();
        assert_eq!((img.width(), img.height()), (800, 500));
    }
}

#[test]
fn missing_html_file_is_fatal() {
    let mut opts = offline_opts();
    opts.source.source = Source::HtmlFile(PathBuf::from("does/not/exist.html"));
    let err = runner::run(&opts, None).err().unwrap();
    assert!(err.to_string().contains("does/not/exist.html"));
}

#[test]
fn cached_table_reloads_identically() {
    let dir = tmp_dir("cache");
    let path = dir.join("reviews.csv");
    let summary = runner::run(&offline_opts(), None).unwrap();

    store::save_dataset_to(&path, &summary.table).unwrap();
    let back = store::load_dataset_from(&path).unwrap();
    assert_eq!(back, summary.table);

    let again = runner::analyze(&back, &offline_opts().analysis).unwrap();
    assert_eq!(again, summary.analysis);
}

#[derive(Default)]
struct Steps {
    total: usize,
    done: Vec<String>,
    finished: bool,
}

impl Progress for Steps {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn step_done(&mut self, step: &str) { self.done.push(step.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn run_reports_every_step() {
    let mut steps = Steps::default();
    runner::run(&offline_opts(), Some(&mut steps)).unwrap();
    assert_eq!(steps.total, runner::STEPS);
    assert_eq!(steps.done.len(), runner::STEPS);
    assert_eq!(steps.done[1], "Extracted 15 reviews");
    assert!(steps.finished);
}

#[test]
fn successful_run_updates_the_cache() {
    let mut opts = offline_opts();
    opts.source.use_cache = true;

    let summary = runner::run(&opts, None).unwrap();
    assert!(store::has_dataset());
    assert_eq!(store::load_dataset().unwrap(), summary.table);
}
