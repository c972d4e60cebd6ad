//! Record loading and wide-to-long reshaping
//!
//! Each yearly file is read with polars into fixed-width `RawRow`s (station
//! plus twelve month slots), which are then flattened into `Reading`s.
//! A file that cannot be read is skipped as a whole; a missing value only
//! drops its own reading.

use crate::error::{Result, TemperatureStatsError};
use crate::models::{Month, RawRow, Reading};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Readings produced by one successfully loaded file
#[derive(Debug, Clone)]
pub struct FileLoad {
    pub path: PathBuf,
    pub readings: Vec<Reading>,
    /// Rows dropped because the station cell was empty
    pub rows_without_station: usize,
}

/// A file excluded from the dataset and the reason
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of loading every discovered file
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub loaded: Vec<FileLoad>,
    pub skipped: Vec<SkippedFile>,
}

impl LoadSummary {
    pub fn total_readings(&self) -> usize {
        self.loaded.iter().map(|load| load.readings.len()).sum()
    }
}

/// Loads yearly CSV files for a configured station column
#[derive(Debug, Clone)]
pub struct RecordLoader {
    station_column: String,
    show_progress: bool,
}

impl RecordLoader {
    pub fn new(station_column: impl Into<String>) -> Self {
        Self {
            station_column: station_column.into(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Load every file, skipping and reporting the ones that fail
    pub fn load_all(&self, files: &[PathBuf]) -> LoadSummary {
        let pb = if self.show_progress {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut summary = LoadSummary::default();

        for file_path in files {
            if let Some(file_name) = file_path.file_name() {
                pb.set_message(format!("Loading: {}", file_name.to_string_lossy()));
            }

            match self.load_file(file_path) {
                Ok(load) => {
                    debug!(
                        "Loaded {} readings from {}",
                        load.readings.len(),
                        file_path.display()
                    );
                    summary.loaded.push(load);
                }
                Err(e) => {
                    let name = display_name(file_path);
                    pb.suspend(|| {
                        eprintln!(
                            "{} {} {} {}",
                            "Skipping file:".bright_yellow(),
                            name,
                            "Error:".bright_yellow(),
                            e
                        );
                    });
                    warn!("Skipped {}: {}", file_path.display(), e);
                    summary.skipped.push(SkippedFile {
                        path: file_path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        summary
    }

    /// Parse and reshape a single file
    pub fn load_file(&self, file_path: &Path) -> Result<FileLoad> {
        let rows = self.read_raw_rows(file_path)?;
        let mut readings = Vec::with_capacity(rows.len() * Month::ALL.len());
        let mut rows_without_station = 0;

        for row in rows {
            if row.station.trim().is_empty() {
                rows_without_station += 1;
                continue;
            }
            readings.extend(reshape_row(row));
        }

        if rows_without_station > 0 {
            debug!(
                "Dropped {} rows without a station in {}",
                rows_without_station,
                file_path.display()
            );
        }

        Ok(FileLoad {
            path: file_path.to_path_buf(),
            readings,
            rows_without_station,
        })
    }

    /// Read the station column and the twelve month columns into raw rows
    pub fn read_raw_rows(&self, file_path: &Path) -> Result<Vec<RawRow>> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(file_path.to_path_buf()))?
            .finish()?;

        let stations = string_column(&df, &self.station_column, file_path)?;

        let mut months: Vec<Vec<Option<f64>>> = Vec::with_capacity(Month::ALL.len());
        for month in Month::ALL {
            months.push(temperature_column(&df, month.column_name(), file_path)?);
        }

        let rows = stations
            .into_iter()
            .enumerate()
            .map(|(i, station)| {
                let mut temperatures = [None; 12];
                for (slot, values) in temperatures.iter_mut().zip(&months) {
                    *slot = values.get(i).copied().flatten();
                }
                RawRow {
                    station: station.unwrap_or_default(),
                    temperatures,
                }
            })
            .collect();

        Ok(rows)
    }
}

/// Flatten one row into a reading per present month, in calendar order
pub fn reshape_row(row: RawRow) -> Vec<Reading> {
    let RawRow {
        station,
        temperatures,
    } = row;

    Month::ALL
        .into_iter()
        .zip(temperatures)
        .filter_map(|(month, temperature)| {
            temperature
                .filter(|t| t.is_finite())
                .map(|temperature| Reading {
                    station: station.clone(),
                    month,
                    temperature,
                })
        })
        .collect()
}

fn required_column<'a>(df: &'a DataFrame, name: &str, file_path: &Path) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| TemperatureStatsError::MissingColumn {
            path: file_path.to_path_buf(),
            column: name.to_string(),
        })
}

fn string_column(df: &DataFrame, name: &str, file_path: &Path) -> Result<Vec<Option<String>>> {
    let series = required_column(df, name, file_path)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|value| value.map(|s| s.trim().to_string()))
        .collect();
    Ok(values)
}

/// Non-numeric cells become missing rather than failing the file
fn temperature_column(df: &DataFrame, name: &str, file_path: &Path) -> Result<Vec<Option<f64>>> {
    let series = required_column(df, name, file_path)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "STATION_NAME,January,February,March,April,May,June,July,August,September,October,November,December";

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reshape_row_skips_missing_months() {
        let mut temperatures = [Some(20.0); 12];
        temperatures[Month::March.index()] = None;
        temperatures[Month::October.index()] = None;
        let row = RawRow {
            station: "Cairns".to_string(),
            temperatures,
        };

        let readings = reshape_row(row);

        assert_eq!(readings.len(), 10);
        assert!(readings.iter().all(|r| r.station == "Cairns"));
        assert!(!readings.iter().any(|r| r.month == Month::March));
        assert!(!readings.iter().any(|r| r.month == Month::October));
        assert_eq!(readings[0].month, Month::January);
        assert_eq!(readings[9].month, Month::December);
    }

    #[test]
    fn test_reshape_row_all_missing() {
        let row = RawRow {
            station: "Nowhere".to_string(),
            temperatures: [None; 12],
        };
        assert!(reshape_row(row).is_empty());
    }

    #[test]
    fn test_load_file_reshapes_wide_rows() {
        let temp_dir = TempDir::new().unwrap();
        let content = format!(
            "{}\nDarwin,30,30,30,29,28,27,26,27,29,30,31,31\nHobart,17,17,16,13,11,9,8,9,11,13,14,16\n",
            HEADER
        );
        let path = write_csv(&temp_dir, "2020.csv", &content);

        let load = RecordLoader::new("STATION_NAME").load_file(&path).unwrap();

        assert_eq!(load.readings.len(), 24);
        let hobart_july: Vec<_> = load
            .readings
            .iter()
            .filter(|r| r.station == "Hobart" && r.month == Month::July)
            .collect();
        assert_eq!(hobart_july.len(), 1);
        assert_eq!(hobart_july[0].temperature, 8.0);
    }

    #[test]
    fn test_blank_and_text_temperatures_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let content = format!(
            "{}\nPerth,24.5,,23.1,n/a,18.0,16.2,15.4,15.9,17.0,19.3,21.2,23.0\n",
            HEADER
        );
        let path = write_csv(&temp_dir, "2021.csv", &content);

        let load = RecordLoader::new("STATION_NAME").load_file(&path).unwrap();

        assert_eq!(load.readings.len(), 10);
        assert!(!load.readings.iter().any(|r| r.month == Month::February));
        assert!(!load.readings.iter().any(|r| r.month == Month::April));
    }

    #[test]
    fn test_columns_in_any_order() {
        let temp_dir = TempDir::new().unwrap();
        let content = "December,November,October,September,August,July,June,May,April,March,February,January,STATION_NAME,NOTES\n\
                       12,11,10,9,8,7,6,5,4,3,2,1,Broome,coastal\n";
        let path = write_csv(&temp_dir, "2022.csv", content);

        let load = RecordLoader::new("STATION_NAME").load_file(&path).unwrap();

        assert_eq!(load.readings.len(), 12);
        for reading in &load.readings {
            assert_eq!(reading.temperature, (reading.month.index() + 1) as f64);
        }
    }

    #[test]
    fn test_missing_month_column_fails_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = "STATION_NAME,January,February\nDarwin,30,31\n";
        let path = write_csv(&temp_dir, "bad.csv", content);

        match RecordLoader::new("STATION_NAME").load_file(&path) {
            Err(TemperatureStatsError::MissingColumn { column, .. }) => {
                assert_eq!(column, "March");
            }
            other => panic!("Expected MissingColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_month_headers_are_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        let content = format!("{}\nDarwin,1,2,3,4,5,6,7,8,9,10,11,12\n", HEADER.to_lowercase());
        let path = write_csv(&temp_dir, "lower.csv", &content);

        let result = RecordLoader::new("STATION_NAME").load_file(&path);

        assert!(matches!(
            result,
            Err(TemperatureStatsError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_custom_station_column() {
        let temp_dir = TempDir::new().unwrap();
        let content = HEADER.replace("STATION_NAME", "SITE") + "\nMildura,1,2,3,4,5,6,7,8,9,10,11,12\n";
        let path = write_csv(&temp_dir, "site.csv", &content);

        let load = RecordLoader::new("SITE").load_file(&path).unwrap();
        assert_eq!(load.readings.len(), 12);
        assert_eq!(load.readings[0].station, "Mildura");
    }

    #[test]
    fn test_rows_without_station_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let content = format!(
            "{}\n,1,2,3,4,5,6,7,8,9,10,11,12\nDubbo,1,2,3,4,5,6,7,8,9,10,11,12\n",
            HEADER
        );
        let path = write_csv(&temp_dir, "nostation.csv", &content);

        let load = RecordLoader::new("STATION_NAME").load_file(&path).unwrap();

        assert_eq!(load.rows_without_station, 1);
        assert_eq!(load.readings.len(), 12);
    }

    #[test]
    fn test_load_all_skips_failures_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        let good = write_csv(
            &temp_dir,
            "2020.csv",
            &format!("{}\nDarwin,1,2,3,4,5,6,7,8,9,10,11,12\n", HEADER),
        );
        let bad = write_csv(&temp_dir, "2019.csv", "just,some,junk\n1,2,3\n");
        let empty = write_csv(&temp_dir, "2018.csv", "");

        let summary = RecordLoader::new("STATION_NAME").load_all(&[bad.clone(), good, empty]);

        assert_eq!(summary.loaded.len(), 1);
        assert_eq!(summary.skipped.len(), 2);
        assert_eq!(summary.skipped[0].path, bad);
        assert_eq!(summary.total_readings(), 12);
    }

    #[test]
    fn test_header_only_file_yields_no_readings() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "header.csv", &format!("{}\n", HEADER));

        let load = RecordLoader::new("STATION_NAME").load_file(&path).unwrap();
        assert!(load.readings.is_empty());
    }
}
