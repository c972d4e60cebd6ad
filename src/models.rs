//! Core data structures for temperature processing.
//!
//! Defines months and seasons, the raw and reshaped record types, the
//! merged dataset and the per-group statistics derived from it.

use crate::constants::MONTH_COLUMNS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Calendar month, in calendar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based position in the calendar
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact CSV header used for this month
    pub fn column_name(self) -> &'static str {
        MONTH_COLUMNS[self.index()]
    }

    /// Southern-Hemisphere season this month belongs to
    pub fn season(self) -> Season {
        match self {
            Month::December | Month::January | Month::February => Season::Summer,
            Month::March | Month::April | Month::May => Season::Autumn,
            Month::June | Month::July | Month::August => Season::Winter,
            Month::September | Month::October | Month::November => Season::Spring,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Month::ALL
            .into_iter()
            .find(|month| month.column_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("Unknown month name: '{}'", s))
    }
}

/// Southern-Hemisphere season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

impl Season {
    /// Report order
    pub const ORDER: [Season; 4] = [Season::Summer, Season::Autumn, Season::Winter, Season::Spring];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Month> for Season {
    fn from(month: Month) -> Self {
        month.season()
    }
}

/// One data line of an input file, months in calendar order
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub station: String,
    pub temperatures: [Option<f64>; 12],
}

/// A single (station, month, temperature) observation
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub station: String,
    pub month: Month,
    pub temperature: f64,
}

/// A reading tagged with the season derived from its month
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonedReading {
    pub station: String,
    pub month: Month,
    pub season: Season,
    pub temperature: f64,
}

impl From<Reading> for SeasonedReading {
    fn from(reading: Reading) -> Self {
        Self {
            season: reading.month.season(),
            station: reading.station,
            month: reading.month,
            temperature: reading.temperature,
        }
    }
}

/// All readings from every successfully loaded file
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    readings: Vec<SeasonedReading>,
}

impl Dataset {
    pub fn new(readings: Vec<SeasonedReading>) -> Self {
        Self { readings }
    }

    pub fn readings(&self) -> &[SeasonedReading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Number of distinct station names
    pub fn station_count(&self) -> usize {
        let mut names: Vec<&str> = self.readings.iter().map(|r| r.station.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}

/// Mean temperature for one season
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStats {
    pub season: Season,
    pub mean: f64,
    pub count: usize,
}

/// Extremes and spread for one station
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub station: String,
    pub max: f64,
    pub min: f64,
    pub range: f64,
    /// Sample standard deviation; `None` with fewer than two readings
    pub std_dev: Option<f64>,
    pub count: usize,
}

/// Stations at the stability extremes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StabilityExtremes {
    pub most_stable: Vec<StationStats>,
    pub most_variable: Vec<StationStats>,
}

/// Everything the report writer needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub seasonal: Vec<SeasonStats>,
    pub largest_range: Vec<StationStats>,
    pub stability: StabilityExtremes,
}

/// Processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_found: usize,
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub total_readings: usize,
    pub station_count: usize,
    pub report_paths: Vec<PathBuf>,
    pub processing_time_ms: u128,
}
