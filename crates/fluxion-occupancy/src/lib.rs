// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Occupancy-aware smart plug savings simulation for FluxION
//!
//! This crate estimates how much energy an office saves over one month when
//! smart plugs drop loads to standby whenever nobody is present. It is a pure
//! computation: every output is returned as plain data, and writing files or
//! charts is left to an adapter such as `fluxion-occupancy-report`.
//!
//! # Pipeline
//!
//! - **Profile**: hourly weights from weekday/weekend and time-of-day patterns,
//!   normalized and scaled to the monthly energy budget
//! - **Occupancy**: seeded Bernoulli draws during business hours
//! - **Transform**: unoccupied hours are replaced by the standby draw
//! - **Aggregate**: totals, energy savings, CO2 and currency savings
//!
//! # Example
//!
//! ```
//! use fluxion_occupancy::{SimulationConfig, SimulationEngine};
//!
//! let config = SimulationConfig::default();
//! let result = SimulationEngine::run(&config)?;
//!
//! assert_eq!(result.records.len(), 720);
//! assert!(result.summary.savings_kwh > 0.0);
//! # Ok::<(), fluxion_occupancy::ConfigError>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod occupancy;
pub mod profile;
pub mod series;
pub mod simulation_engine;
pub mod transform;

// Re-exports for convenience
pub use aggregate::summarize;
pub use config::{OccupancyProbabilities, ProfileWeights, SimulationConfig};
pub use error::{ConfigError, ConfigResult};
pub use occupancy::OccupancySampler;
pub use profile::{DayKind, HourlySlot, ProfileGenerator};
pub use series::{DailyTotal, HourlyRecord, RollingPoint, SimulationResult, SimulationSummary};
pub use simulation_engine::SimulationEngine;
pub use transform::{ConsumptionPair, apply_standby};
