// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub analysis: AnalysisOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Reviews,
    Ratings,
    TopCompanies,
    CocoaVsRating,
}

/// Where the review page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// A saved copy of the page; no network.
    HtmlFile(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub source: Source,
    /// Write the extracted table to the local store after a successful scrape.
    pub use_cache: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            source: Source::Url(s!(DEFAULT_URL)),
            use_cache: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOptions {
    pub bins: usize,
    pub top_n: usize,
    /// Directory for the PNG plots; `None` skips rendering.
    pub plots_dir: Option<PathBuf>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            top_n: DEFAULT_TOP_N,
            plots_dir: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
    /// CLI only: export was requested explicitly.
    pub enabled: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
            enabled: false,
        }
    }
}

impl ExportOptions {
    /// Final file path. A pasted extension wins over the format's own.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self
            .out_path
            .ext
            .as_ref()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!(self.format.ext()));
        path.push(join!(&*stem, ".", &ext));
        path
    }

    /// Parse user text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
