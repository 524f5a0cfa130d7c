// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Simulation output data.
//!
//! The engine returns a [`SimulationResult`]: the hourly series plus the
//! aggregated summary. The derived views used by charts (rolling 24 h sums and
//! daily totals) are computed here so that adapters only have to draw them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Width of the rolling consumption window in hours
pub const ROLLING_WINDOW_HOURS: usize = 24;

/// One simulated hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Start of the hour
    pub timestamp: NaiveDateTime,

    /// Usage weight before normalization
    pub raw_weight: f64,

    /// Normalized weight (sums to one over the series)
    pub weight: f64,

    /// Expected consumption without control (kWh)
    pub kwh_estimated: f64,

    /// Whether anyone was present
    pub presence: bool,

    /// Average power without control (W)
    pub consumption_w: f64,

    /// Average power with control (W)
    pub consumption_after_w: f64,

    /// Energy without control (kWh)
    pub kwh_before: f64,

    /// Energy with control (kWh)
    pub kwh_after: f64,
}

/// Aggregated savings over the whole series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub region: String,
    pub class_label: String,
    pub month_label: String,

    /// Total consumption without control (kWh)
    pub total_before_kwh: f64,

    /// Total consumption with control (kWh)
    pub total_after_kwh: f64,

    /// `total_before_kwh - total_after_kwh`
    pub savings_kwh: f64,

    /// Avoided emissions (kg CO2)
    pub savings_co2_kg: f64,

    /// Avoided energy cost (currency units)
    pub savings_currency: f64,
}

/// Rolling sums ending at `timestamp`; `None` until a full window is available
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingPoint {
    pub timestamp: NaiveDateTime,
    pub before_kwh: Option<f64>,
    pub after_kwh: Option<f64>,
}

/// Consumption totals for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub before_kwh: f64,
    pub after_kwh: f64,
}

impl DailyTotal {
    pub fn savings_kwh(&self) -> f64 {
        self.before_kwh - self.after_kwh
    }
}

/// Complete output of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Hourly series in chronological order
    pub records: Vec<HourlyRecord>,

    pub summary: SimulationSummary,
}

impl SimulationResult {
    /// Trailing 24 h sums of before and after consumption, one point per hour
    pub fn rolling_sum_24h(&self) -> Vec<RollingPoint> {
        let before: Vec<f64> = self.records.iter().map(|r| r.kwh_before).collect();
        let after: Vec<f64> = self.records.iter().map(|r| r.kwh_after).collect();
        let before = rolling_sum(&before, ROLLING_WINDOW_HOURS);
        let after = rolling_sum(&after, ROLLING_WINDOW_HOURS);

        self.records
            .iter()
            .zip(before.into_iter().zip(after))
            .map(|(record, (before_kwh, after_kwh))| RollingPoint {
                timestamp: record.timestamp,
                before_kwh,
                after_kwh,
            })
            .collect()
    }

    /// Before/after totals per calendar day, in date order
    pub fn daily_totals(&self) -> Vec<DailyTotal> {
        let mut totals: Vec<DailyTotal> = Vec::new();

        for record in &self.records {
            let date = record.timestamp.date();
            match totals.last_mut() {
                Some(day) if day.date == date => {
                    day.before_kwh += record.kwh_before;
                    day.after_kwh += record.kwh_after;
                }
                _ => totals.push(DailyTotal {
                    date,
                    before_kwh: record.kwh_before,
                    after_kwh: record.kwh_after,
                }),
            }
        }

        totals
    }

    /// Hours with presence
    pub fn occupied_hours(&self) -> usize {
        self.records.iter().filter(|r| r.presence).count()
    }
}

/// Trailing window sum.
///
/// Entry `i` is the sum of `values[i + 1 - window ..= i]`, or `None` while
/// fewer than `window` values have been seen.
pub fn rolling_sum(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut sums = Vec::with_capacity(values.len());
    let mut running = 0.0;

    for (i, value) in values.iter().enumerate() {
        running += value;
        if i >= window {
            running -= values[i - window];
        }
        sums.push((i + 1 >= window).then_some(running));
    }

    sums
}
