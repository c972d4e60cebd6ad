//! Dataset merging
//!
//! Concatenates per-file readings into a single dataset and tags every
//! reading with its season.

use crate::error::{Result, TemperatureStatsError};
use crate::models::{Dataset, SeasonedReading};
use crate::processor::loader::LoadSummary;
use std::path::Path;
use tracing::debug;

/// Build the dataset from every successfully loaded file
///
/// Fails with `NoValidData` when no file loaded or the loaded files hold no
/// readings at all.
pub fn merge_loads(summary: LoadSummary, input_dir: &Path) -> Result<Dataset> {
    let files_loaded = summary.loaded.len();
    let files_skipped = summary.skipped.len();
    let total = summary.total_readings();

    if total == 0 {
        return Err(TemperatureStatsError::NoValidData {
            path: input_dir.to_path_buf(),
            files_skipped,
        });
    }

    let mut readings = Vec::with_capacity(total);
    for load in summary.loaded {
        readings.extend(load.readings.into_iter().map(SeasonedReading::from));
    }

    debug!(
        "Merged {} readings from {} files ({} skipped)",
        readings.len(),
        files_loaded,
        files_skipped
    );

    Ok(Dataset::new(readings))
}
