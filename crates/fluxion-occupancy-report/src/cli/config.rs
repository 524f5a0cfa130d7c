// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! TOML configuration file parsing for simulation runs.

use crate::cli::args::RunArgs;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use fluxion_occupancy::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::fs;

/// Root configuration structure for a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Simulation parameters
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for CSV files and charts
    #[serde(default = "default_output_dir")]
    pub dir: String,

    /// Render charts
    #[serde(default = "default_charts")]
    pub charts: bool,

    /// Chart width in pixels
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    /// Chart height in pixels
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

// Default value functions
fn default_output_dir() -> String {
    "resultados_iot".to_owned()
}

fn default_charts() -> bool {
    true
}

fn default_chart_width() -> u32 {
    1000
}

fn default_chart_height() -> u32 {
    400
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            charts: default_charts(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl RunConfig {
    /// Load run configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse TOML config: {path}"))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line overrides on top of file values
    pub fn apply_overrides(&mut self, args: &RunArgs) -> Result<()> {
        if let Some(dir) = &args.output_dir {
            self.output.dir.clone_from(dir);
        }
        if let Some(seed) = args.seed {
            self.simulation.seed = seed;
        }
        if let Some(start) = &args.start {
            self.simulation.start_date = parse_date(start)?;
        }
        if let Some(end) = &args.end {
            self.simulation.end_date = parse_date(end)?;
        }
        if args.no_charts {
            self.output.charts = false;
        }
        Ok(())
    }

    /// Generate example config as TOML string
    pub fn example_toml() -> String {
        r#"# FluxION Occupancy Simulator - Configuration Example

[simulation]
region = "Sudeste"
class_label = "Comercial"
month_label = "2024-09"
monthly_energy_kwh = 800.0
standby_watts = 30.0
co2_factor_kg_per_kwh = 0.1
tariff_per_kwh = 0.8
start_date = "2024-09-01"
end_date = "2024-09-30"      # inclusive
seed = 42

[simulation.occupancy]
weekday_business = 0.85      # Mon-Fri 08:00-18:59
weekend_business = 0.25      # Sat-Sun 08:00-18:59

[simulation.weights]
weekday_business = 1.5
weekday_shoulder = 0.8       # 06:00-07:59 and 19:00-20:59
weekday_off = 0.3
weekend_business = 0.6
weekend_off = 0.2

[output]
dir = "resultados_iot"
charts = true
chart_width = 1000
chart_height = 400
"#
        .to_owned()
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").with_context(|| {
        format!(
            "Invalid date format: '{value}'\n\n\
            Expected format: YYYY-MM-DD (e.g., 2024-09-01)"
        )
    })
}
