// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Simulation parameters.
//!
//! Everything the simulation depends on lives in [`SimulationConfig`], which is
//! passed explicitly into the engine. Defaults reproduce the reference office:
//! a commercial consumer in the Sudeste region, September 2024, 800 kWh/month.

use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Complete configuration for a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Region label written to the summary (e.g. "Sudeste")
    pub region: String,

    /// Consumer class label (e.g. "Comercial")
    pub class_label: String,

    /// Month label written to the summary (e.g. "2024-09")
    pub month_label: String,

    /// Energy consumed over the whole range without smart control (kWh)
    pub monthly_energy_kwh: f64,

    /// Draw of a controlled load while the office is empty (W)
    pub standby_watts: f64,

    /// Grid emission factor (kg CO2 per kWh)
    pub co2_factor_kg_per_kwh: f64,

    /// Energy tariff (currency per kWh)
    pub tariff_per_kwh: f64,

    /// First simulated day
    pub start_date: NaiveDate,

    /// Last simulated day (inclusive)
    pub end_date: NaiveDate,

    /// Seed for the occupancy random generator
    pub seed: u64,

    /// Presence probabilities during business hours
    pub occupancy: OccupancyProbabilities,

    /// Relative usage weights per day type and time of day
    pub weights: ProfileWeights,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            region: "Sudeste".to_owned(),
            class_label: "Comercial".to_owned(),
            month_label: "2024-09".to_owned(),
            monthly_energy_kwh: 800.0,
            standby_watts: 30.0,
            co2_factor_kg_per_kwh: 0.1,
            tariff_per_kwh: 0.8,
            start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap_or(NaiveDate::MIN),
            end_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap_or(NaiveDate::MIN),
            seed: 42,
            occupancy: OccupancyProbabilities::default(),
            weights: ProfileWeights::default(),
        }
    }
}

impl SimulationConfig {
    /// Check that every numeric parameter is usable.
    ///
    /// An end date before the start date is accepted and simply produces an
    /// empty series.
    pub fn validate(&self) -> ConfigResult<()> {
        non_negative("monthly_energy_kwh", self.monthly_energy_kwh)?;
        non_negative("standby_watts", self.standby_watts)?;
        non_negative("co2_factor_kg_per_kwh", self.co2_factor_kg_per_kwh)?;
        non_negative("tariff_per_kwh", self.tariff_per_kwh)?;
        self.occupancy.validate()?;
        self.weights.validate()
    }

    /// Number of simulated days, zero when the range is empty
    pub fn num_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days.max(0)).unwrap_or(0)
    }
}

/// Probability that the office is occupied in a given business hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupancyProbabilities {
    /// Monday to Friday, 08:00-18:59
    pub weekday_business: f64,
    /// Saturday and Sunday, 08:00-18:59
    pub weekend_business: f64,
}

impl Default for OccupancyProbabilities {
    fn default() -> Self {
        Self {
            weekday_business: 0.85,
            weekend_business: 0.25,
        }
    }
}

impl OccupancyProbabilities {
    fn validate(&self) -> ConfigResult<()> {
        probability("occupancy.weekday_business", self.weekday_business)?;
        probability("occupancy.weekend_business", self.weekend_business)
    }
}

/// Relative hourly usage weights.
///
/// Only ratios matter; the profile is normalized before scaling to the
/// monthly energy budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileWeights {
    /// Weekday 08:00-18:59
    pub weekday_business: f64,
    /// Weekday 06:00-07:59 and 19:00-20:59
    pub weekday_shoulder: f64,
    /// Weekday remaining hours
    pub weekday_off: f64,
    /// Weekend 08:00-18:59
    pub weekend_business: f64,
    /// Weekend remaining hours
    pub weekend_off: f64,
}

impl Default for ProfileWeights {
    fn default() -> Self {
        Self {
            weekday_business: 1.5,
            weekday_shoulder: 0.8,
            weekday_off: 0.3,
            weekend_business: 0.6,
            weekend_off: 0.2,
        }
    }
}

impl ProfileWeights {
    fn validate(&self) -> ConfigResult<()> {
        non_negative("weights.weekday_business", self.weekday_business)?;
        non_negative("weights.weekday_shoulder", self.weekday_shoulder)?;
        non_negative("weights.weekday_off", self.weekday_off)?;
        non_negative("weights.weekend_business", self.weekend_business)?;
        non_negative("weights.weekend_off", self.weekend_off)
    }
}

fn non_negative(name: &'static str, value: f64) -> ConfigResult<()> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

fn probability(name: &'static str, value: f64) -> ConfigResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { name, value });
    }
    Ok(())
}
