// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Before/after consumption for a single hour.

use serde::{Deserialize, Serialize};

const WATTS_PER_KW: f64 = 1000.0;

/// Consumption of one hour with and without smart plug control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionPair {
    /// Average power without control (W)
    pub consumption_w: f64,
    /// Average power with control (W)
    pub consumption_after_w: f64,
    /// Energy without control (kWh)
    pub kwh_before: f64,
    /// Energy with control (kWh)
    pub kwh_after: f64,
}

/// Apply smart plug control to one hour.
///
/// Over a one-hour slot, energy in kWh and average power in kW are the same
/// number, so `kwh_estimated * 1000` is the average draw in watts. When the
/// office is empty the draw is replaced by `standby_watts`; when occupied it
/// is left untouched. Standby is not a floor: an empty hour whose draw is
/// already below standby reports more energy after control than before.
pub fn apply_standby(kwh_estimated: f64, present: bool, standby_watts: f64) -> ConsumptionPair {
    let consumption_w = kwh_estimated * WATTS_PER_KW;
    let consumption_after_w = if present {
        consumption_w
    } else {
        standby_watts
    };

    ConsumptionPair {
        consumption_w,
        consumption_after_w,
        kwh_before: consumption_w / WATTS_PER_KW,
        kwh_after: consumption_after_w / WATTS_PER_KW,
    }
}
