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

//! Reporting adapters for the FluxION occupancy simulator
//!
//! Takes the plain [`SimulationResult`](fluxion_occupancy::SimulationResult)
//! produced by `fluxion-occupancy` and turns it into files and console output:
//!
//! - **CSV**: detailed hourly series and a one-row summary
//! - **Charts**: rolling 24 h consumption and daily totals (SVG)
//! - **Console**: savings report, optional daily table or JSON summary

pub mod chart;
pub mod cli;
pub mod export;
pub mod output;

pub use export::CsvExporter;
pub use output::{OutputFiles, ReportWriter};
