//! Temperature Statistics Library
//!
//! Computes seasonal and per-station temperature statistics from a
//! directory of yearly CSV files holding monthly averages per station.
//!
//! This library provides tools for:
//! - Discovering the yearly `*.csv` files in an input directory
//! - Reshaping wide month columns into (station, month, temperature) readings
//! - Skipping unreadable files without aborting the run
//! - Seasonal means under the Southern-Hemisphere calendar
//! - Largest temperature range and most stable/variable stations, with ties
//! - Writing and echoing three plain-text reports

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use error::{Result, TemperatureStatsError};
pub use models::{Dataset, Month, Reading, Season, SeasonedReading, StationStats};
pub use processor::TemperatureProcessor;
