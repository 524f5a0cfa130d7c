// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Savings aggregation.

use crate::config::SimulationConfig;
use crate::series::{HourlyRecord, SimulationSummary};

/// Sum the series and derive energy, CO2 and cost savings.
///
/// An empty series produces a summary of zeros.
pub fn summarize(records: &[HourlyRecord], config: &SimulationConfig) -> SimulationSummary {
    let total_before_kwh: f64 = records.iter().map(|r| r.kwh_before).sum();
    let total_after_kwh: f64 = records.iter().map(|r| r.kwh_after).sum();
    let savings_kwh = total_before_kwh - total_after_kwh;

    SimulationSummary {
        region: config.region.clone(),
        class_label: config.class_label.clone(),
        month_label: config.month_label.clone(),
        total_before_kwh,
        total_after_kwh,
        savings_kwh,
        savings_co2_kg: savings_kwh * config.co2_factor_kg_per_kwh,
        savings_currency: savings_kwh * config.tariff_per_kwh,
    }
}
