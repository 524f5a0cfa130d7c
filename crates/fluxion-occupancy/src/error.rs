// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

use thiserror::Error;

/// Simulation configuration error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Parameter '{name}' must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("Parameter '{name}' must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("Probability '{name}' must lie between 0 and 1, got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
