// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! CLI module for the occupancy simulator command-line interface.

pub mod args;
pub mod config;
pub mod formatters;

pub use args::{Cli, Commands, RunArgs};
pub use config::{OutputConfig, RunConfig};
pub use formatters::{ConsoleFormatter, TableFormatter};
