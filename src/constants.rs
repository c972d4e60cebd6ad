//! Application constants for the temperature statistics pipeline
//!
//! Default file names, column names and labels shared by the
//! configuration, loader and report writer.

// =============================================================================
// Input Layout
// =============================================================================

/// Conventional directory holding the yearly CSV files
pub const DEFAULT_INPUT_DIR: &str = "temperatures";

/// Glob pattern matched inside the input directory
pub const CSV_GLOB: &str = "*.csv";

/// Column holding the station identifier
pub const DEFAULT_STATION_COLUMN: &str = "STATION_NAME";

/// Month column headers in calendar order (exact, case-sensitive)
pub const MONTH_COLUMNS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// =============================================================================
// Output Layout
// =============================================================================

/// Reports are written to the working directory unless told otherwise
pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub const SEASONAL_REPORT_FILE: &str = "average_temp.txt";
pub const RANGE_REPORT_FILE: &str = "largest_temp_range_station.txt";
pub const STABILITY_REPORT_FILE: &str = "temperature_stability_stations.txt";

/// Temperature unit marker appended after the degree sign
pub const DEFAULT_UNIT: &str = "C";

pub const DEGREE_SIGN: char = '°';

pub const MOST_STABLE_LABEL: &str = "Most Stable";
pub const MOST_VARIABLE_LABEL: &str = "Most Variable";

// =============================================================================
// Logging
// =============================================================================

/// Target used when building the default log filter
pub const LOG_TARGET: &str = "temperature_stats";
