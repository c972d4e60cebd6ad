use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;
use temperature_stats::cli::{Args, setup_logging};
use temperature_stats::{TemperatureProcessor, TemperatureStatsError};

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Input conditions get a plain message; anything else is a failure
            let fatal_input = error
                .downcast_ref::<TemperatureStatsError>()
                .is_some_and(TemperatureStatsError::is_fatal_input);
            if fatal_input {
                eprintln!("{}", format!("{:#}", error).bright_yellow());
            } else {
                eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            }
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.to_config();
    let input_dir = config.input_dir.clone();

    let processor = TemperatureProcessor::new(config).context("Invalid configuration")?;
    let processor = if args.quiet {
        processor.quiet()
    } else {
        processor
    };

    match processor.run() {
        Ok(_stats) => Ok(()),
        Err(e) if e.is_fatal_input() => Err(e.into()),
        Err(e) => Err(e).with_context(|| {
            format!("Failed to process temperatures in {}", input_dir.display())
        }),
    }
}
