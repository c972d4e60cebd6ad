//! Error handling for temperature statistics operations.
//!
//! Distinguishes the fatal conditions that stop a run before any report is
//! written from the per-file failures that are reported and skipped.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemperatureStatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("No CSV files found in {path}")]
    NoInputFiles { path: PathBuf },

    #[error("No valid data in any CSV file under {path} ({files_skipped} skipped)")]
    NoValidData { path: PathBuf, files_skipped: usize },

    #[error("Missing required column '{column}' in file: {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TemperatureStatsError {
    /// True for the conditions that end a run before any report exists
    pub fn is_fatal_input(&self) -> bool {
        matches!(
            self,
            TemperatureStatsError::NoInputFiles { .. } | TemperatureStatsError::NoValidData { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TemperatureStatsError>;
