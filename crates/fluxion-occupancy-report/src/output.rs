// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Output directory writer.
//!
//! Writes every file of a run into one directory in a single pass after the
//! simulation has finished.

use crate::chart::{draw_daily_chart, draw_rolling_chart};
use crate::cli::config::OutputConfig;
use crate::export::CsvExporter;
use anyhow::{Context, Result};
use fluxion_occupancy::SimulationResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DETAILED_CSV: &str = "simulacao_detalhada.csv";
pub const SUMMARY_CSV: &str = "resumo_simulacao.csv";
pub const ROLLING_CHART: &str = "grafico_rolling_24h.svg";
pub const DAILY_CHART: &str = "grafico_consumo_diario.svg";

/// Paths of the files written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub detailed_csv: PathBuf,
    pub summary_csv: PathBuf,
    /// `None` when charts were disabled or there was nothing to plot
    pub rolling_chart: Option<PathBuf>,
    pub daily_chart: Option<PathBuf>,
}

/// Writes CSV files and charts for a simulation result
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
    charts: bool,
    chart_size: (u32, u32),
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            charts: true,
            chart_size: (1000, 400),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
            charts: config.charts,
            chart_size: (config.chart_width, config.chart_height),
        }
    }

    #[must_use]
    pub fn with_charts(mut self, charts: bool) -> Self {
        self.charts = charts;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory if needed and write all files
    pub fn write(&self, result: &SimulationResult) -> Result<OutputFiles> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create output directory: {}", self.dir.display())
        })?;

        let detailed_csv = self.dir.join(DETAILED_CSV);
        CsvExporter::write_detailed_file(&result.records, &detailed_csv)?;
        info!(path = %detailed_csv.display(), rows = result.records.len(), "Wrote detailed CSV");

        let summary_csv = self.dir.join(SUMMARY_CSV);
        CsvExporter::write_summary_file(&result.summary, &summary_csv)?;
        info!(path = %summary_csv.display(), "Wrote summary CSV");

        let (rolling_chart, daily_chart) = if self.charts {
            (self.write_rolling_chart(result)?, self.write_daily_chart(result)?)
        } else {
            (None, None)
        };

        Ok(OutputFiles {
            detailed_csv,
            summary_csv,
            rolling_chart,
            daily_chart,
        })
    }

    fn write_rolling_chart(&self, result: &SimulationResult) -> Result<Option<PathBuf>> {
        let path = self.dir.join(ROLLING_CHART);
        let written = draw_rolling_chart(&result.rolling_sum_24h(), &path, self.chart_size)
            .with_context(|| format!("Failed to render chart {}", path.display()))?;

        if written {
            info!(path = %path.display(), "Wrote rolling 24h chart");
            Ok(Some(path))
        } else {
            warn!("Less than 24 hours simulated, skipping rolling chart");
            Ok(None)
        }
    }

    fn write_daily_chart(&self, result: &SimulationResult) -> Result<Option<PathBuf>> {
        let path = self.dir.join(DAILY_CHART);
        let written = draw_daily_chart(&result.daily_totals(), &path, self.chart_size)
            .with_context(|| format!("Failed to render chart {}", path.display()))?;

        if written {
            info!(path = %path.display(), "Wrote daily consumption chart");
            Ok(Some(path))
        } else {
            warn!("No simulated days, skipping daily chart");
            Ok(None)
        }
    }
}
