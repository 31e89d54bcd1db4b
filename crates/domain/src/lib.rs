// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rules for the carbon calculator.
//!
//! Everything in this crate is pure: no I/O, no logging, no persistence.
//! The calculation engine in `carbon-calc` composes these pieces with the
//! record store and the emission factor lookups.

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

mod emission;
mod emission_factor;
mod error;
mod session;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use emission::{
    CalculationResult, WasteType, energy_emission, find_transportation_factor,
    solid_waste_emission,
};
pub use emission_factor::{
    EmissionFactorTable, EnergyEmissionFactor, SolidWasteEmissionFactor,
    TransportationEmissionFactor,
};
pub use error::{DomainError, IdentityField};
pub use session::{ActivityUpdate, CalculationSession, SessionLifecycle};
pub use types::{
    CalculationId, IdentityFields, Region, TransportationEntry, UserIdentity, VehicleType,
};
pub use validation::require_non_blank;
