// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    analysis::Histogram,
    config::options::{AppOptions, ExportFormat, Source},
    progress::StderrProgress,
    runner::{self, Analysis, RunSummary},
    store,
};

pub enum Action {
    Run(AppOptions),
    /// Skip scraping; analyze the cached table.
    Cached(AppOptions),
    Help,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Action::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Action::Run(opts) => {
            let mut progress = StderrProgress::new();
            let summary = runner::run(&opts, Some(&mut progress))?;
            print_report(&summary, &opts);
            Ok(())
        }
        Action::Cached(opts) => {
            let table = store::load_dataset()
                .map_err(|e| format!("No usable cache at {}: {}", store::store_path().display(), e))?;
            logf!("CLI: loaded {} cached reviews", table.len());
            let analysis = runner::analyze(&table, &opts.analysis)?;
            let mut files_written = Vec::new();
            if opts.export.enabled {
                files_written.push(crate::file::export_table(&opts.export, &table)?);
            }
            if let Some(dir) = &opts.analysis.plots_dir {
                files_written.extend(runner::write_plots(dir, &table, &analysis)?);
            }
            print_report(&RunSummary { table, analysis, files_written }, &opts);
            Ok(())
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Action, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut cached = false;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                opts.source.source = Source::Url(v);
            }
            "--html" => {
                let v = args.next().ok_or("Missing value for --html")?;
                opts.source.source = Source::HtmlFile(PathBuf::from(v));
            }
            "--cached" => cached = true,
            "--no-cache" => opts.source.use_cache = false,
            "--bins" => {
                let v: usize = args.next().ok_or("Missing value for --bins")?.parse()?;
                if v == 0 { return Err("--bins must be at least 1".into()); }
                opts.analysis.bins = v;
            }
            "--top" => {
                let v: usize = args.next().ok_or("Missing value for --top")?.parse()?;
                opts.analysis.top_n = v;
            }
            "--plots" => {
                let v = args.next().ok_or("Missing value for --plots")?;
                opts.analysis.plots_dir = Some(PathBuf::from(v));
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                opts.export.set_path(&v);
                opts.export.enabled = true;
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => opts.export.include_headers = false,
            "-h" | "--help" => return Ok(Action::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(if cached { Action::Cached(opts) } else { Action::Run(opts) })
}

/* ---------- report ---------- */

fn print_report(summary: &RunSummary, opts: &AppOptions) {
    let a = &summary.analysis;
    println!("Reviews: {}", summary.table.len());
    println!();
    println!("Distribution of Chocolate Ratings");
    print!("{}", histogram_text(&a.histogram, 40));
    println!();
    println!("Top {} companies by mean rating", opts.analysis.top_n);
    print!("{}", ranking_text(a));
    println!();
    println!("Ratings vs Percentage of Cocoa");
    println!("{}", fit_text(a));
    if !a.issues.is_empty() {
        println!();
        println!("{} value(s) out of range (see {})", a.issues.len(), crate::config::consts::LOG_FILE);
    }
    for p in &summary.files_written {
        println!("Wrote {}", p.display());
    }
}

pub fn histogram_text(h: &Histogram, width: usize) -> String {
    let edges = h.edges();
    let max = h.max_count().max(1);
    let mut out = s!();
    for (i, &c) in h.counts.iter().enumerate() {
        let bar = "#".repeat(c * width / max);
        let close = if i + 1 == h.bins() { ']' } else { ')' };
        out.push_str(&format!(
            "[{:>5.2}, {:>5.2}{} {:>5} {}\n",
            edges[i], edges[i + 1], close, c, bar
        ));
    }
    out
}

pub fn ranking_text(a: &Analysis) -> String {
    let name_w = a.top.iter().map(|c| c.company.chars().count()).max().unwrap_or(7).max(7);
    let mut out = format!("{:<name_w$}  {:>6}  {:>7}\n", "Company", "Mean", "Reviews");
    for c in &a.top {
        out.push_str(&format!("{:<name_w$}  {:>6.3}  {:>7}\n", c.company, c.mean, c.reviews));
    }
    out
}

pub fn fit_text(a: &Analysis) -> String {
    let f = &a.fit;
    let mut out = format!(
        "Rating = {:.5} * Percentage {} {:.5}  (n = {})",
        f.slope,
        if f.intercept < 0.0 { '-' } else { '+' },
        f.intercept.abs(),
        f.n
    );
    if let (Some(r), Some(r2)) = (f.r, f.r_squared()) {
        out.push_str(&format!("\nr = {:.4}, r² = {:.4}", r, r2));
    }
    out
}
