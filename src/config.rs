//! Configuration management and validation.
//!
//! Holds the input directory, output locations, column naming and display
//! settings for a run. The input directory is always passed in explicitly
//! so the pipeline can be pointed at any folder.

use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_STATION_COLUMN, DEFAULT_UNIT,
    RANGE_REPORT_FILE, SEASONAL_REPORT_FILE, STABILITY_REPORT_FILE,
};
use crate::error::{Result, TemperatureStatsError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// File names of the three reports, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFiles {
    pub seasonal: String,
    pub range: String,
    pub stability: String,
}

impl Default for ReportFiles {
    fn default() -> Self {
        Self {
            seasonal: SEASONAL_REPORT_FILE.to_string(),
            range: RANGE_REPORT_FILE.to_string(),
            stability: STABILITY_REPORT_FILE.to_string(),
        }
    }
}

/// Global configuration for a temperature statistics run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Directory scanned for `*.csv` files
    pub input_dir: PathBuf,

    /// Directory the reports are written into
    pub output_dir: PathBuf,

    /// Header of the station identifier column
    pub station_column: String,

    /// Unit marker printed after the degree sign
    pub unit: String,

    /// Report file names
    pub report_files: ReportFiles,

    /// Show a per-file progress bar while loading
    pub show_progress: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            station_column: DEFAULT_STATION_COLUMN.to_string(),
            unit: DEFAULT_UNIT.to_string(),
            report_files: ReportFiles::default(),
            show_progress: true,
        }
    }
}

impl AnalysisConfig {
    /// Create configuration reading from the given input directory
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_station_column(mut self, station_column: impl Into<String>) -> Self {
        self.station_column = station_column.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_report_files(mut self, report_files: ReportFiles) -> Self {
        self.report_files = report_files;
        self
    }

    /// Disable the loading progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn seasonal_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_files.seasonal)
    }

    pub fn range_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_files.range)
    }

    pub fn stability_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_files.stability)
    }

    /// Reject settings that would produce unusable reports
    pub fn validate(&self) -> Result<()> {
        if self.station_column.trim().is_empty() {
            return Err(TemperatureStatsError::Configuration {
                message: "Station column name cannot be empty".to_string(),
            });
        }

        if self.unit.trim().is_empty() {
            return Err(TemperatureStatsError::Configuration {
                message: "Temperature unit cannot be empty".to_string(),
            });
        }

        let files = [
            &self.report_files.seasonal,
            &self.report_files.range,
            &self.report_files.stability,
        ];
        if files.iter().any(|name| name.trim().is_empty()) {
            return Err(TemperatureStatsError::Configuration {
                message: "Report file names cannot be empty".to_string(),
            });
        }
        if files[0] == files[1] || files[0] == files[2] || files[1] == files[2] {
            return Err(TemperatureStatsError::Configuration {
                message: "Report file names must be distinct".to_string(),
            });
        }

        debug!(
            "Configuration valid: input={}, output={}, station column={}",
            self.input_dir.display(),
            self.output_dir.display(),
            self.station_column
        );
        Ok(())
    }
}
