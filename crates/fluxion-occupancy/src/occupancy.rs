// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Synthetic occupancy signal.
//!
//! Presence is drawn independently for each business hour with a probability
//! that depends on the day type. Outside business hours the office is always
//! empty and no random number is consumed, so the sequence of draws depends
//! only on the seed and on the business-hour slots in iteration order.

use crate::config::OccupancyProbabilities;
use crate::profile::{DayKind, HourlySlot, is_business_hour};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bernoulli presence sampler driven by an explicit random generator
#[derive(Debug)]
pub struct OccupancySampler<R> {
    probabilities: OccupancyProbabilities,
    rng: R,
}

impl OccupancySampler<StdRng> {
    /// Sampler backed by a `StdRng` seeded with `seed`
    pub fn seeded(probabilities: OccupancyProbabilities, seed: u64) -> Self {
        Self::new(probabilities, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OccupancySampler<R> {
    pub fn new(probabilities: OccupancyProbabilities, rng: R) -> Self {
        Self { probabilities, rng }
    }

    /// Presence probability for an hour, zero outside business hours
    pub fn probability_for(&self, kind: DayKind, hour: u32) -> f64 {
        if !is_business_hour(hour) {
            return 0.0;
        }
        match kind {
            DayKind::Weekday => self.probabilities.weekday_business,
            DayKind::Weekend => self.probabilities.weekend_business,
        }
    }

    /// Draw presence for a single hour
    ///
    /// # Panics
    /// Panics if the configured probability lies outside `[0, 1]`; run
    /// [`SimulationConfig::validate`](crate::SimulationConfig::validate) first.
    pub fn sample_slot(&mut self, kind: DayKind, hour: u32) -> bool {
        if !is_business_hour(hour) {
            return false;
        }
        let probability = self.probability_for(kind, hour);
        self.rng.gen_bool(probability)
    }

    /// Draw presence for every slot, in order
    pub fn sample(&mut self, slots: &[HourlySlot]) -> Vec<bool> {
        slots
            .iter()
            .map(|slot| self.sample_slot(slot.day_kind, slot.hour()))
            .collect()
    }
}
