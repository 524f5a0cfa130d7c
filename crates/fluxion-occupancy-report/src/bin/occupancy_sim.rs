// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! CLI entry point for the FluxION occupancy simulator

use anyhow::{Context, Result};
use clap::Parser;
use fluxion_occupancy::SimulationEngine;
use fluxion_occupancy_report::{
    ReportWriter,
    cli::{Cli, Commands, ConsoleFormatter, RunArgs, RunConfig, TableFormatter},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("fluxion_occupancy=info,fluxion_occupancy_report=info")
        }))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_command(&args),
        Commands::ExampleConfig => {
            print!("{}", RunConfig::example_toml());
            Ok(())
        }
    }
}

fn run_command(args: &RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path, "Loading configuration");
            RunConfig::from_file(path)?
        }
        None => RunConfig::default(),
    };
    config.apply_overrides(args)?;

    let result = SimulationEngine::run(&config.simulation).context("Invalid simulation config")?;

    let writer = ReportWriter::from_config(&config.output);
    writer.write(&result).with_context(|| {
        format!(
            "Failed to write results to {}",
            writer.dir().display()
        )
    })?;

    if args.json {
        println!("{}", ConsoleFormatter::format_json(&result.summary)?);
    } else {
        println!(
            "{}",
            ConsoleFormatter::format_summary(&result.summary, &config.output.dir)
        );
    }

    if args.daily_table {
        println!("{}", TableFormatter::format_daily(&result.daily_totals()));
    }

    Ok(())
}
