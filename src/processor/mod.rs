//! Main processing engine for the temperature statistics pipeline.
//!
//! Runs discovery, loading, merging, aggregation and report writing in
//! sequence. Each stage completes before the next begins, and the two fatal
//! input conditions stop the run before any report is written.

pub mod aggregate;
pub mod discovery;
pub mod loader;
pub mod merge;
pub mod report;

#[cfg(test)]
pub mod tests;

use self::{
    discovery::FileDiscovery,
    loader::RecordLoader,
    report::{ReportWriter, WrittenReport},
};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::ProcessingStats;

use colored::*;
use std::time::Instant;
use tracing::info;

/// Main processor for a directory of yearly temperature files
#[derive(Debug)]
pub struct TemperatureProcessor {
    config: AnalysisConfig,
    file_discovery: FileDiscovery,
    record_loader: RecordLoader,
    report_writer: ReportWriter,
    verbose_console: bool,
}

impl TemperatureProcessor {
    /// Create a new processor, validating the configuration
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            file_discovery: FileDiscovery::new(config.input_dir.clone()),
            record_loader: RecordLoader::new(config.station_column.clone())
                .with_progress(config.show_progress),
            report_writer: ReportWriter::new(config.unit.clone()),
            verbose_console: true,
            config,
        })
    }

    /// Suppress stage headings and the summary on stdout
    pub fn quiet(mut self) -> Self {
        self.verbose_console = false;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the pipeline and write the three reports
    pub fn process(&self) -> Result<(ProcessingStats, Vec<WrittenReport>)> {
        let start_time = Instant::now();
        self.heading(&format!(
            "{} {}",
            "Reading temperature files from".bright_green().bold(),
            self.config.input_dir.display()
        ));

        // Step 1: Discover CSV files
        let csv_files = self.file_discovery.discover_csv_files()?;
        info!("Found {} CSV files", csv_files.len());

        // Step 2: Load and reshape every file, skipping failures
        let summary = self.record_loader.load_all(&csv_files);
        let files_loaded = summary.loaded.len();
        let files_skipped = summary.skipped.len();

        // Step 3: Merge into one seasoned dataset
        let dataset = merge::merge_loads(summary, self.file_discovery.input_dir())?;
        info!(
            "Dataset holds {} readings from {} stations",
            dataset.len(),
            dataset.station_count()
        );

        // Step 4: Aggregate
        let aggregates = aggregate::aggregate(&dataset);

        // Step 5: Write reports
        let written = self.report_writer.write_all(&aggregates, &self.config)?;

        let stats = ProcessingStats {
            files_found: csv_files.len(),
            files_loaded,
            files_skipped,
            total_readings: dataset.len(),
            station_count: dataset.station_count(),
            report_paths: written.iter().map(|r| r.path.clone()).collect(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        Ok((stats, written))
    }

    /// Run the pipeline, then echo each report from disk and print a summary
    pub fn run(&self) -> Result<ProcessingStats> {
        let (stats, _written) = self.process()?;

        report::echo_reports(&stats.report_paths)?;

        if self.verbose_console {
            print_summary(&stats);
        }
        Ok(stats)
    }

    fn heading(&self, text: &str) {
        if self.verbose_console {
            println!("{}", text);
        }
    }
}

fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {} of {}",
        "Files loaded:".bright_cyan(),
        stats.files_loaded.to_string().bright_white(),
        stats.files_found.to_string().bright_white()
    );
    if stats.files_skipped > 0 {
        println!(
            "  {} {}",
            "Files skipped:".bright_red(),
            stats.files_skipped.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {} from {} stations",
        "Readings:".bright_cyan(),
        stats.total_readings.to_string().bright_white().bold(),
        stats.station_count.to_string().bright_white().bold()
    );
}
