// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fluxion-occupancy")]
#[command(author, version, about = "FluxION Occupancy Savings Simulator")]
#[command(
    long_about = "Estimates the monthly savings of occupancy-aware smart plug control for an office.\n\
    \nGenerates an hourly baseline profile, samples occupancy with a fixed seed, drops\n\
    unoccupied hours to standby power and reports energy, CO2 and cost savings.\n\
    \nExamples:\n  \
    fluxion-occupancy run                          # Reference office, September 2024\n  \
    fluxion-occupancy run --config office.toml     # Custom parameters\n  \
    fluxion-occupancy example-config > office.toml # Start a config file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the simulation and write CSV files, charts and the console report
    #[command(
        long_about = "Run the simulation and write all outputs.\n\
        \nFiles written to the output directory:\n  \
        - simulacao_detalhada.csv: hourly series\n  \
        - resumo_simulacao.csv: one-row summary\n  \
        - grafico_rolling_24h.svg: rolling 24h consumption\n  \
        - grafico_consumo_diario.svg: daily consumption\n\
        \nExamples:\n  \
        fluxion-occupancy run\n  \
        fluxion-occupancy run --seed 7 --output-dir ./results\n  \
        fluxion-occupancy run --start 2024-10-01 --end 2024-10-31 --daily-table"
    )]
    Run(RunArgs),

    /// Print an example TOML configuration
    ExampleConfig,
}

#[derive(Debug, Parser)]
pub struct RunArgs {
    /// TOML configuration file
    #[arg(
        long,
        help = "Path to a TOML config file with [simulation] and [output] tables"
    )]
    pub config: Option<String>,

    /// Output directory (overrides the config file)
    #[arg(long, help = "Directory for CSV files and charts (created if absent)")]
    pub output_dir: Option<String>,

    /// Occupancy seed (overrides the config file)
    #[arg(long, help = "Seed for the occupancy random generator")]
    pub seed: Option<u64>,

    /// First simulated day (YYYY-MM-DD)
    #[arg(long, help = "First simulated day, e.g. 2024-09-01")]
    pub start: Option<String>,

    /// Last simulated day, inclusive (YYYY-MM-DD)
    #[arg(long, help = "Last simulated day (inclusive), e.g. 2024-09-30")]
    pub end: Option<String>,

    /// Skip chart rendering
    #[arg(long, default_value_t = false)]
    pub no_charts: bool,

    /// Print a table of daily totals after the report
    #[arg(long, default_value_t = false)]
    pub daily_table: bool,

    /// Print the summary as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["fluxion-occupancy", "run"]).unwrap();

        let Commands::Run(args) = cli.command else {
            panic!("Expected run command");
        };
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert!(!args.no_charts);
        assert!(!args.json);
    }

    #[test]
    fn test_run_overrides() {
        let cli = Cli::try_parse_from([
            "fluxion-occupancy",
            "run",
            "--seed",
            "7",
            "--output-dir",
            "out",
            "--start",
            "2024-10-01",
            "--no-charts",
        ])
        .unwrap();

        let Commands::Run(args) = cli.command else {
            panic!("Expected run command");
        };
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output_dir.as_deref(), Some("out"));
        assert_eq!(args.start.as_deref(), Some("2024-10-01"));
        assert!(args.no_charts);
    }

    #[test]
    fn test_example_config_command() {
        let cli = Cli::try_parse_from(["fluxion-occupancy", "example-config"]).unwrap();

        assert!(matches!(cli.command, Commands::ExampleConfig));
    }
}
