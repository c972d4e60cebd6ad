//! Command-line interface components.

use crate::config::AnalysisConfig;
use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_STATION_COLUMN, DEFAULT_UNIT, LOG_TARGET,
};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "temperature-stats")]
#[command(about = "Seasonal and per-station temperature statistics from yearly CSV files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing the yearly CSV files
    #[arg(value_name = "INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory the three reports are written into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Header of the station name column
    #[arg(long, default_value = DEFAULT_STATION_COLUMN)]
    pub station_column: String,

    /// Temperature unit marker shown after the degree sign
    #[arg(long, default_value = DEFAULT_UNIT)]
    pub unit: String,

    /// Hide the loading progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print reports and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the run configuration from defaults plus flag overrides
    pub fn to_config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::new(self.input_dir.clone())
            .with_output_dir(self.output_dir.clone())
            .with_station_column(self.station_column.clone())
            .with_unit(self.unit.clone());

        if self.no_progress || self.quiet {
            config.without_progress()
        } else {
            config
        }
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Set up structured logging on stderr, honouring `RUST_LOG` when set
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    tracing::debug!("Logging initialized at level: {}", log_level);
}
