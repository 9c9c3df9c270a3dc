// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::table::ReviewTable;

/// Write the review table according to ExportOptions (path, headers, delimiter).
/// Returns the final path written to.
pub fn export_table(
    export: &ExportOptions,
    table: &ReviewTable,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(
        &table.headers(),
        &table.to_rows(),
        export.include_headers,
        export.delim(),
    );

    fs::write(&path, contents)?;
    logf!("Export: {} rows → {}", table.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
