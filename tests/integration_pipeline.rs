//! End-to-end tests for the temperature statistics pipeline
//!
//! Drive the public library API against a temporary `temperatures/`
//! directory laid out the way the tool expects to find it.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use temperature_stats::{AnalysisConfig, TemperatureProcessor, TemperatureStatsError};

const HEADER: &str = "STATION_NAME,January,February,March,April,May,June,July,August,September,October,November,December";

fn write_csv(dir: &Path, name: &str, body: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), format!("{}\n{}", HEADER, body)).unwrap();
}

fn config_for(temp_dir: &TempDir) -> AnalysisConfig {
    AnalysisConfig::new(temp_dir.path().join("temperatures"))
        .with_output_dir(temp_dir.path())
        .without_progress()
}

/// Several years, several stations, one broken file
#[test]
fn test_multi_year_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);

    write_csv(
        &config.input_dir,
        "1990.csv",
        "Adelaide,29.0,29.0,26.0,22.0,19.0,16.0,15.0,16.0,18.0,21.0,24.0,26.0\n\
         Perth,31.0,31.0,29.0,25.0,22.0,19.0,18.0,19.0,20.0,23.0,26.0,29.0\n",
    );
    write_csv(
        &config.input_dir,
        "1991.csv",
        "Adelaide,30.0,,27.0,22.0,19.0,16.0,15.0,16.0,18.0,21.0,24.0,27.0\n\
         Perth,32.0,31.0,29.0,25.0,22.0,19.0,,19.0,20.0,23.0,26.0,29.0\n",
    );
    fs::write(config.input_dir.join("1992.csv"), "").unwrap();

    let processor = TemperatureProcessor::new(config.clone()).unwrap().quiet();
    let stats = processor.run().unwrap();

    assert_eq!(stats.files_found, 3);
    assert_eq!(stats.files_loaded, 2);
    assert_eq!(stats.files_skipped, 1);
    assert_eq!(stats.total_readings, 46);
    assert_eq!(stats.station_count, 2);

    let seasonal = fs::read_to_string(config.seasonal_report_path()).unwrap();
    let seasons: Vec<&str> = seasonal
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(seasons, vec!["Summer", "Autumn", "Winter", "Spring"]);

    // Adelaide spans 15.0 to 30.0, Perth 18.0 to 32.0
    let range = fs::read_to_string(config.range_report_path()).unwrap();
    assert_eq!(
        range,
        "Adelaide: Range 15.0°C (Max: 30.0°C, Min: 15.0°C)\n"
    );

    let stability = fs::read_to_string(config.stability_report_path()).unwrap();
    let lines: Vec<&str> = stability.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Most Stable: "));
    assert!(lines[1].starts_with("Most Variable: "));
    assert!(lines.iter().all(|line| line.ends_with("°C")));
}

#[test]
fn test_empty_directory_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    fs::create_dir_all(&config.input_dir).unwrap();

    let processor = TemperatureProcessor::new(config.clone()).unwrap().quiet();
    let error = processor.run().unwrap_err();

    assert!(matches!(error, TemperatureStatsError::NoInputFiles { .. }));
    assert!(error.is_fatal_input());
    assert!(!config.seasonal_report_path().exists());
    assert!(!config.range_report_path().exists());
    assert!(!config.stability_report_path().exists());
}
