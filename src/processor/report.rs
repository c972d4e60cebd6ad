//! Report rendering, writing and console echo
//!
//! Each report is rendered to a string, written over any previous file, and
//! later read back from disk so the console shows exactly what was saved.

use crate::config::AnalysisConfig;
use crate::constants::{DEGREE_SIGN, MOST_STABLE_LABEL, MOST_VARIABLE_LABEL};
use crate::error::{Result, TemperatureStatsError};
use crate::models::{Aggregates, SeasonStats, StabilityExtremes, StationStats};

use colored::*;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A report as written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenReport {
    pub path: PathBuf,
    pub contents: String,
}

/// Renders and writes the three reports for one unit marker
#[derive(Debug, Clone)]
pub struct ReportWriter {
    unit: String,
}

impl ReportWriter {
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    /// One decimal place, degree sign and unit
    pub fn format_temperature(&self, value: f64) -> String {
        format!("{:.1}{}{}", value, DEGREE_SIGN, self.unit)
    }

    pub fn render_seasonal(&self, seasonal: &[SeasonStats]) -> String {
        let mut out = String::new();
        for stats in seasonal {
            let _ = writeln!(
                out,
                "{}: {}",
                stats.season,
                self.format_temperature(stats.mean)
            );
        }
        out
    }

    pub fn render_range(&self, stations: &[StationStats]) -> String {
        let mut out = String::new();
        for stats in stations {
            let _ = writeln!(
                out,
                "{}: Range {} (Max: {}, Min: {})",
                stats.station,
                self.format_temperature(stats.range),
                self.format_temperature(stats.max),
                self.format_temperature(stats.min)
            );
        }
        out
    }

    pub fn render_stability(&self, extremes: &StabilityExtremes) -> String {
        let mut out = String::new();
        let groups = [
            (MOST_STABLE_LABEL, &extremes.most_stable),
            (MOST_VARIABLE_LABEL, &extremes.most_variable),
        ];
        for (label, stations) in groups {
            for stats in stations {
                // Extremes only hold stations with a defined deviation
                if let Some(std_dev) = stats.std_dev {
                    let _ = writeln!(
                        out,
                        "{}: {}: StdDev {}",
                        label,
                        stats.station,
                        self.format_temperature(std_dev)
                    );
                }
            }
        }
        out
    }

    /// Render and write all three reports, overwriting existing files
    pub fn write_all(
        &self,
        aggregates: &Aggregates,
        config: &AnalysisConfig,
    ) -> Result<Vec<WrittenReport>> {
        fs::create_dir_all(&config.output_dir).map_err(|source| {
            TemperatureStatsError::ReportWrite {
                path: config.output_dir.clone(),
                source,
            }
        })?;

        let reports = [
            (
                config.seasonal_report_path(),
                self.render_seasonal(&aggregates.seasonal),
            ),
            (
                config.range_report_path(),
                self.render_range(&aggregates.largest_range),
            ),
            (
                config.stability_report_path(),
                self.render_stability(&aggregates.stability),
            ),
        ];

        reports
            .into_iter()
            .map(|(path, contents)| write_report(&path, contents))
            .collect()
    }
}

/// Write one report, replacing any previous contents
pub fn write_report(path: &Path, contents: String) -> Result<WrittenReport> {
    fs::write(path, &contents).map_err(|source| TemperatureStatsError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());

    Ok(WrittenReport {
        path: path.to_path_buf(),
        contents,
    })
}

/// Read a report back from disk
pub fn read_back(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Print each report file under a labelled header, read from disk
pub fn echo_reports(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        let contents = read_back(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        println!("\n{}", format!("--- {} ---", name).bright_cyan().bold());
        print!("{}", contents);
    }
    Ok(())
}
