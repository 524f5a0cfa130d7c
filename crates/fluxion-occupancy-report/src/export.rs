// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! CSV export of the hourly series and the summary.
//!
//! Column names are part of the file contract and stay fixed, including the
//! Portuguese summary headers expected by downstream spreadsheets.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use fluxion_occupancy::{HourlyRecord, SimulationSummary};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const DETAILED_COLUMNS: [&str; 7] = [
    "timestamp",
    "kwh_estimated",
    "presence",
    "consumption_w",
    "consumption_after_w",
    "kwh_before",
    "kwh_after",
];

pub const SUMMARY_COLUMNS: [&str; 8] = [
    "regiao",
    "classe",
    "mes",
    "consumo_total_antes_kwh",
    "consumo_total_depois_kwh",
    "economia_kwh",
    "economia_co2_kg",
    "economia_reais",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct DetailedRow {
    timestamp: String,
    kwh_estimated: f64,
    presence: u8,
    consumption_w: f64,
    consumption_after_w: f64,
    kwh_before: f64,
    kwh_after: f64,
}

impl From<&HourlyRecord> for DetailedRow {
    fn from(record: &HourlyRecord) -> Self {
        Self {
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            kwh_estimated: record.kwh_estimated,
            presence: u8::from(record.presence),
            consumption_w: record.consumption_w,
            consumption_after_w: record.consumption_after_w,
            kwh_before: record.kwh_before,
            kwh_after: record.kwh_after,
        }
    }
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    regiao: &'a str,
    classe: &'a str,
    mes: &'a str,
    consumo_total_antes_kwh: f64,
    consumo_total_depois_kwh: f64,
    economia_kwh: f64,
    economia_co2_kg: f64,
    economia_reais: f64,
}

impl<'a> From<&'a SimulationSummary> for SummaryRow<'a> {
    fn from(summary: &'a SimulationSummary) -> Self {
        Self {
            regiao: &summary.region,
            classe: &summary.class_label,
            mes: &summary.month_label,
            consumo_total_antes_kwh: summary.total_before_kwh,
            consumo_total_depois_kwh: summary.total_after_kwh,
            economia_kwh: summary.savings_kwh,
            economia_co2_kg: summary.savings_co2_kg,
            economia_reais: summary.savings_currency,
        }
    }
}

/// Writer for the simulation CSV files
#[derive(Debug)]
pub struct CsvExporter;

impl CsvExporter {
    /// Write the hourly series, one row per hour in chronological order.
    ///
    /// The header is written even when the series is empty.
    pub fn write_detailed<W: Write>(records: &[HourlyRecord], writer: W) -> Result<()> {
        let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv.write_record(DETAILED_COLUMNS)?;
        for record in records {
            csv.serialize(DetailedRow::from(record))?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write the single-row summary
    pub fn write_summary<W: Write>(summary: &SimulationSummary, writer: W) -> Result<()> {
        let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv.write_record(SUMMARY_COLUMNS)?;
        csv.serialize(SummaryRow::from(summary))?;
        csv.flush()?;
        Ok(())
    }

    pub fn write_detailed_file(records: &[HourlyRecord], path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        Self::write_detailed(records, file)
            .with_context(|| format!("Failed to write CSV to {}", path.display()))
    }

    pub fn write_summary_file(summary: &SimulationSummary, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        Self::write_summary(summary, file)
            .with_context(|| format!("Failed to write CSV to {}", path.display()))
    }
}
