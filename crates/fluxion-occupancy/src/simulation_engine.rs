// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Simulation pipeline.
//!
//! Runs the stages in order: weight profile, normalization and scaling,
//! occupancy sampling, per-hour standby transform and aggregation. The engine
//! performs no I/O; writing results is the job of a report adapter.

use crate::aggregate::summarize;
use crate::config::SimulationConfig;
use crate::error::ConfigResult;
use crate::occupancy::OccupancySampler;
use crate::profile::ProfileGenerator;
use crate::series::{HourlyRecord, SimulationResult};
use crate::transform::apply_standby;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Runs occupancy savings simulations
#[derive(Debug)]
pub struct SimulationEngine;

impl SimulationEngine {
    /// Run a simulation with the occupancy generator seeded from `config.seed`
    pub fn run(config: &SimulationConfig) -> ConfigResult<SimulationResult> {
        Self::run_with_rng(config, StdRng::seed_from_u64(config.seed))
    }

    /// Run a simulation drawing occupancy from the given generator
    pub fn run_with_rng<R: Rng>(config: &SimulationConfig, rng: R) -> ConfigResult<SimulationResult> {
        config.validate()?;

        let slots = ProfileGenerator::generate(config.start_date, config.end_date, &config.weights);
        debug!(
            start = %config.start_date,
            end = %config.end_date,
            hours = slots.len(),
            "Generated hourly profile"
        );

        let raw: Vec<f64> = slots.iter().map(|slot| slot.raw_weight).collect();
        let weights = ProfileGenerator::normalize(&raw);
        let kwh_estimated = ProfileGenerator::scale(&weights, config.monthly_energy_kwh);

        let presence = OccupancySampler::new(config.occupancy, rng).sample(&slots);
        debug!(
            occupied_hours = presence.iter().filter(|p| **p).count(),
            "Sampled occupancy"
        );

        let records: Vec<HourlyRecord> = slots
            .iter()
            .zip(&weights)
            .zip(&kwh_estimated)
            .zip(&presence)
            .map(|(((slot, &weight), &kwh), &present)| {
                let pair = apply_standby(kwh, present, config.standby_watts);
                HourlyRecord {
                    timestamp: slot.timestamp,
                    raw_weight: slot.raw_weight,
                    weight,
                    kwh_estimated: kwh,
                    presence: present,
                    consumption_w: pair.consumption_w,
                    consumption_after_w: pair.consumption_after_w,
                    kwh_before: pair.kwh_before,
                    kwh_after: pair.kwh_after,
                }
            })
            .collect();

        let summary = summarize(&records, config);
        info!(
            region = %summary.region,
            month = %summary.month_label,
            total_before_kwh = summary.total_before_kwh,
            total_after_kwh = summary.total_after_kwh,
            savings_kwh = summary.savings_kwh,
            "Simulation complete"
        );

        Ok(SimulationResult { records, summary })
    }
}
