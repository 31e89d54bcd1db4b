// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The carbon calculation engine.
//!
//! Sessions are created from a validated user identity, updated with monthly
//! activity values, and queried for a result computed against stored emission
//! factors. Storage and factor resolution are supplied by the caller through
//! [`SessionStore`] and the factor lookup traits.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calculate;
mod engine;
mod error;
mod ports;

#[cfg(test)]
mod tests;

pub use calculate::{calculate, calculate_energy, calculate_solid_waste, calculate_transportation};
pub use engine::{CalculationUpdate, get_result, start_calculation, update_calculation_info};
pub use error::EngineError;
pub use ports::{
    EnergyFactorLookup, SessionStore, SolidWasteFactorLookup, TransportationFactorLookup,
};
