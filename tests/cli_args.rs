// tests/cli_args.rs
use std::path::PathBuf;

use cacao_scrape::cli::{parse_args, Action};
use cacao_scrape::config::consts::DEFAULT_URL;
use cacao_scrape::config::options::{ExportFormat, Source};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_fetch_the_review_page() {
    let Ok(Action::Run(opts)) = parse_args(args(&[])) else { panic!("expected Run") };
    assert_eq!(opts.source.source, Source::Url(DEFAULT_URL.to_string()));
    assert_eq!(opts.analysis.bins, 10);
    assert_eq!(opts.analysis.top_n, 10);
    assert!(!opts.export.enabled);
    assert!(opts.source.use_cache);
}

#[test]
fn export_path_and_format() {
    let a = args(&["--html", "page.html", "-o", "out/x", "--format", "tsv", "--no-headers", "--top", "5"]);
    let Ok(Action::Run(opts)) = parse_args(a) else { panic!("expected Run") };
    assert_eq!(opts.source.source, Source::HtmlFile(PathBuf::from("page.html")));
    assert!(opts.export.enabled);
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert!(!opts.export.include_headers);
    assert_eq!(opts.export.out_path(), PathBuf::from("out/x.tsv"));
    assert_eq!(opts.analysis.top_n, 5);
}

#[test]
fn explicit_extension_wins() {
    let Ok(Action::Run(opts)) = parse_args(args(&["-o", "out/x.txt", "--format", "tsv"])) else {
        panic!("expected Run")
    };
    assert_eq!(opts.export.out_path(), PathBuf::from("out/x.txt"));
}

#[test]
fn cached_and_help() {
    assert!(matches!(parse_args(args(&["--cached"])), Ok(Action::Cached(_))));
    assert!(matches!(parse_args(args(&["--bins", "4", "-h"])), Ok(Action::Help)));
}

#[test]
fn bad_args_are_errors() {
    assert!(parse_args(args(&["--bins", "0"])).is_err());
    assert!(parse_args(args(&["--bins"])).is_err());
    assert!(parse_args(args(&["--format", "json"])).is_err());
    assert!(parse_args(args(&["--frobnicate"])).is_err());
}
