//! Seasonal and per-station aggregation
//!
//! Every statistic is computed over the whole dataset with an explicit
//! key -> accumulator map: a fixed slot per season, and a `BTreeMap` per
//! station so tied stations come out in name order.
//!
//! A station with a single reading has no sample standard deviation and is
//! left out of both stability extremes. It still takes part in the range
//! comparison with a range of zero.

use crate::models::{
    Aggregates, Dataset, Season, SeasonStats, SeasonedReading, StabilityExtremes, StationStats,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Running sum and count for an arithmetic mean
#[derive(Debug, Clone, Copy, Default)]
struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Running max/min plus Welford mean and M2 for one station
#[derive(Debug, Clone, Copy)]
struct StationAccumulator {
    max: f64,
    min: f64,
    count: usize,
    mean: f64,
    m2: f64,
}

impl StationAccumulator {
    fn new() -> Self {
        Self {
            max: f64::NEG_INFINITY,
            min: f64::INFINITY,
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    fn push(&mut self, value: f64) {
        self.max = self.max.max(value);
        self.min = self.min.min(value);

        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Sample standard deviation (n - 1 denominator)
    fn std_dev(&self) -> Option<f64> {
        (self.count > 1).then(|| (self.m2 / (self.count - 1) as f64).sqrt())
    }

    fn finish(self, station: String) -> StationStats {
        StationStats {
            station,
            max: self.max,
            min: self.min,
            range: self.max - self.min,
            std_dev: self.std_dev(),
            count: self.count,
        }
    }
}

/// Mean temperature per season, in report order, absent seasons omitted
pub fn seasonal_means(readings: &[SeasonedReading]) -> Vec<SeasonStats> {
    let mut slots = [MeanAccumulator::default(); 4];
    for reading in readings {
        slots[reading.season.index()].push(reading.temperature);
    }

    Season::ORDER
        .into_iter()
        .filter_map(|season| {
            let slot = slots[season.index()];
            slot.mean().map(|mean| SeasonStats {
                season,
                mean,
                count: slot.count,
            })
        })
        .collect()
}

/// Per-station extremes and spread, ordered by station name
pub fn station_stats(readings: &[SeasonedReading]) -> Vec<StationStats> {
    let mut stations: BTreeMap<&str, StationAccumulator> = BTreeMap::new();
    for reading in readings {
        stations
            .entry(reading.station.as_str())
            .or_insert_with(StationAccumulator::new)
            .push(reading.temperature);
    }

    stations
        .into_iter()
        .map(|(station, acc)| acc.finish(station.to_string()))
        .collect()
}

/// Every station whose range equals the largest range
pub fn largest_range(stations: &[StationStats]) -> Vec<StationStats> {
    let Some(max_range) = stations.iter().map(|s| s.range).reduce(f64::max) else {
        return Vec::new();
    };

    stations
        .iter()
        .filter(|s| s.range == max_range)
        .cloned()
        .collect()
}

/// Stations tied at the lowest and at the highest standard deviation
pub fn stability_extremes(stations: &[StationStats]) -> StabilityExtremes {
    let eligible: Vec<(&StationStats, f64)> = stations
        .iter()
        .filter_map(|s| s.std_dev.map(|std| (s, std)))
        .collect();

    let excluded = stations.len() - eligible.len();
    if excluded > 0 {
        debug!(
            "{} stations with a single reading excluded from stability ranking",
            excluded
        );
    }

    let (Some(min_std), Some(max_std)) = (
        eligible.iter().map(|&(_, std)| std).reduce(f64::min),
        eligible.iter().map(|&(_, std)| std).reduce(f64::max),
    ) else {
        warn!("No station has enough readings to rank stability");
        return StabilityExtremes::default();
    };

    let tied_at = |target: f64| -> Vec<StationStats> {
        eligible
            .iter()
            .filter(|&&(_, std)| std == target)
            .map(|&(s, _)| s.clone())
            .collect()
    };

    StabilityExtremes {
        most_stable: tied_at(min_std),
        most_variable: tied_at(max_std),
    }
}

/// Run all three aggregations over the dataset
pub fn aggregate(dataset: &Dataset) -> Aggregates {
    let readings = dataset.readings();
    let stations = station_stats(readings);

    debug!(
        "Aggregating {} readings across {} stations",
        readings.len(),
        stations.len()
    );

    Aggregates {
        seasonal: seasonal_means(readings),
        largest_range: largest_range(&stations),
        stability: stability_extremes(&stations),
    }
}
