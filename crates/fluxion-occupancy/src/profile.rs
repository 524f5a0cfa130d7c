// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Hourly baseline profile generation.
//!
//! Each hour of the simulated range gets a raw weight from the day type and
//! time of day. Weights are then normalized to sum to one and scaled by the
//! monthly energy budget, which gives the expected consumption per hour.

use crate::config::ProfileWeights;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Hours treated as the working day (08:00 through 18:59)
pub const BUSINESS_HOURS: RangeInclusive<u32> = 8..=18;

/// Whether a day is a working day or part of the weekend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
                Self::Weekday
            }
        }
    }
}

pub fn is_business_hour(hour: u32) -> bool {
    BUSINESS_HOURS.contains(&hour)
}

fn is_shoulder_hour(hour: u32) -> bool {
    (6..8).contains(&hour) || (19..=20).contains(&hour)
}

/// Raw usage weight for one hour of a given day type
pub fn hourly_weight(weights: &ProfileWeights, kind: DayKind, hour: u32) -> f64 {
    match kind {
        DayKind::Weekend if is_business_hour(hour) => weights.weekend_business,
        DayKind::Weekend => weights.weekend_off,
        DayKind::Weekday if is_business_hour(hour) => weights.weekday_business,
        DayKind::Weekday if is_shoulder_hour(hour) => weights.weekday_shoulder,
        DayKind::Weekday => weights.weekday_off,
    }
}

/// One hour of the simulated range before any scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySlot {
    /// Start of the hour
    pub timestamp: NaiveDateTime,

    /// Day type the hour belongs to
    pub day_kind: DayKind,

    /// Unnormalized usage weight
    pub raw_weight: f64,
}

impl HourlySlot {
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

/// Generator for the hourly weight grid
#[derive(Debug)]
pub struct ProfileGenerator;

impl ProfileGenerator {
    /// Build one slot per hour from `start` to `end` inclusive.
    ///
    /// Returns an empty grid when `end` precedes `start`.
    pub fn generate(start: NaiveDate, end: NaiveDate, weights: &ProfileWeights) -> Vec<HourlySlot> {
        let num_days = usize::try_from((end - start).num_days() + 1).unwrap_or(0);
        let mut slots = Vec::with_capacity(num_days * 24);

        for date in start.iter_days().take(num_days) {
            let day_kind = DayKind::of(date);
            let midnight = date.and_time(NaiveTime::MIN);

            for hour in 0..24 {
                slots.push(HourlySlot {
                    timestamp: midnight + chrono::Duration::hours(i64::from(hour)),
                    day_kind,
                    raw_weight: hourly_weight(weights, day_kind, hour),
                });
            }
        }

        slots
    }

    /// Normalize weights so they sum to one.
    ///
    /// A zero (or empty) total yields all-zero weights instead of dividing by zero.
    pub fn normalize(raw: &[f64]) -> Vec<f64> {
        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return vec![0.0; raw.len()];
        }
        raw.iter().map(|w| w / total).collect()
    }

    /// Distribute `total_kwh` over the hours proportionally to normalized weights
    pub fn scale(normalized: &[f64], total_kwh: f64) -> Vec<f64> {
        normalized.iter().map(|w| w * total_kwh).collect()
    }
}
