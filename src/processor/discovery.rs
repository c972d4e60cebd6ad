//! File discovery module for yearly temperature files
//!
//! Matches `*.csv` directly inside the configured input directory.

use crate::constants::CSV_GLOB;
use crate::error::{Result, TemperatureStatsError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File discovery component for the input directory
#[derive(Debug)]
pub struct FileDiscovery {
    input_dir: PathBuf,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Discover all CSV files in the input directory
    ///
    /// Fails with `NoInputFiles` when nothing matches, which also covers a
    /// missing directory.
    pub fn discover_csv_files(&self) -> Result<Vec<PathBuf>> {
        let escaped_dir = glob::Pattern::escape(&self.input_dir.to_string_lossy());
        let pattern = Path::new(&escaped_dir).join(CSV_GLOB);
        let pattern_str = pattern.to_string_lossy();

        debug!("Searching for CSV files with pattern: {}", pattern_str);

        let mut files = Vec::new();
        for entry in glob::glob(&pattern_str)? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => debug!("Ignoring non-file match: {}", path.display()),
                Err(e) => warn!("Unreadable entry during discovery: {}", e),
            }
        }

        if files.is_empty() {
            return Err(TemperatureStatsError::NoInputFiles {
                path: self.input_dir.clone(),
            });
        }

        debug!(
            "Found {} CSV files in {}",
            files.len(),
            self.input_dir.display()
        );
        Ok(files)
    }
}
