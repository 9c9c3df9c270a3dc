// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    analysis::{self, Histogram, LinearFit},
    config::consts::{HISTOGRAM_PNG, PLOT_H, PLOT_W, SCATTER_PNG},
    config::options::{AnalysisOptions, AppOptions},
    file,
    plot,
    progress::Progress,
    scrape,
    table::{CompanyMean, RangeIssue, ReviewTable},
};

/// Number of steps reported through `Progress` by `run`.
pub const STEPS: usize = 4;

/// The three analyses over one table.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub histogram: Histogram,
    pub top: Vec<CompanyMean>,
    pub fit: LinearFit,
    pub issues: Vec<RangeIssue>,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub table: ReviewTable,
    pub analysis: Analysis,
    pub files_written: Vec<PathBuf>,
}

pub fn analyze(table: &ReviewTable, opts: &AnalysisOptions) -> Result<Analysis, Box<dyn Error>> {
    let cocoa = table
        .cocoa_percents()
        .ok_or("Cocoa percentage column missing")?;

    let histogram = analysis::histogram(table.ratings(), opts.bins);
    let top = analysis::top_companies(table, opts.top_n);
    let fit = analysis::linear_fit(cocoa, table.ratings())?;

    logf!(
        "Analyze: rows={} top={} slope={:.5} intercept={:.5}",
        table.len(),
        top.len(),
        fit.slope,
        fit.intercept
    );

    Ok(Analysis { histogram, top, fit, issues: table.validate() })
}

/// Render both plots into `dir`. Returns the written paths.
pub fn write_plots(
    dir: &std::path::Path,
    table: &ReviewTable,
    analysis: &Analysis,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    file::ensure_directory(dir)?;

    let hist_path = dir.join(HISTOGRAM_PNG);
    plot::render_histogram(&analysis.histogram, &hist_path, PLOT_W, PLOT_H)?;

    let points: Vec<(f64, f64)> = table
        .records()
        .map(|r| (r.cocoa_percent, r.rating))
        .collect();
    let scatter_path = dir.join(SCATTER_PNG);
    plot::render_scatter(&points, Some(&analysis.fit), &scatter_path, PLOT_W, PLOT_H)?;

    logf!("Plots: wrote {} and {}", hist_path.display(), scatter_path.display());
    Ok(vec![hist_path, scatter_path])
}

/// Top-level runner: collect → analyze → export/plots.
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STEPS);
    }

    let result = run_inner(opts, progress.as_deref_mut());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if let Err(e) = &result {
        loge!("Run: {}", e);
    }
    result
}

fn run_inner(
    opts: &AppOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let table = scrape::collect_reviews(&opts.source, progress.as_deref_mut())?;

    let analysis = analyze(&table, &opts.analysis)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Analyzed");
    }

    let mut files_written = Vec::new();
    if opts.export.enabled {
        files_written.push(file::export_table(&opts.export, &table)?);
    }
    if let Some(dir) = &opts.analysis.plots_dir {
        files_written.extend(write_plots(dir, &table, &analysis)?);
    }
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("Wrote {} file(s)", files_written.len()));
    }

    Ok(RunSummary { table, analysis, files_written })
}
