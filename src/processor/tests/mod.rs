//! Integration tests for the processor module
//!
//! Exercise the complete pipeline against temporary input directories.


use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "STATION_NAME,January,February,March,April,May,June,July,August,September,October,November,December";

/// Write a yearly CSV with the standard header and the given data lines
pub fn write_year(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
