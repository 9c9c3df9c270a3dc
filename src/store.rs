// src/store.rs
//
// Local cache of the last extracted review table (.store/reviews.csv).

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{STORE_DIR, STORE_FILE};
use crate::csv::{detect_headers, parse_rows, write_row};
use crate::table::{ReviewTable, COL_COMPANY};

pub fn store_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(STORE_FILE)
}

pub fn has_dataset() -> bool {
    store_path().is_file()
}

pub fn save_dataset(table: &ReviewTable) -> io::Result<PathBuf> {
    let p = store_path();
    save_dataset_to(&p, table)?;
    Ok(p)
}

pub fn save_dataset_to(path: &Path, table: &ReviewTable) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf: Vec<u8> = Vec::new();
    write_row(&mut buf, &table.headers(), ',')?;
    for row in table.to_rows() {
        write_row(&mut buf, &row, ',')?;
    }
    fs::write(path, buf)
}

pub fn load_dataset() -> Result<ReviewTable, Box<dyn std::error::Error>> {
    load_dataset_from(&store_path())
}

pub fn load_dataset_from(path: &Path) -> Result<ReviewTable, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let (_headers, rows) = detect_headers(parse_rows(&text, ','), COL_COMPANY);
    Ok(ReviewTable::from_rows(&rows)?)
}
