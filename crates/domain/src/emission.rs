// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Emission arithmetic.
//!
//! All values are plain `f64`; no rounding is applied anywhere.

use crate::emission_factor::{
    EnergyEmissionFactor, SolidWasteEmissionFactor, TransportationEmissionFactor,
};
use crate::types::VehicleType;
use serde::{Deserialize, Serialize};

/// The two shares solid waste is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasteType {
    /// The recycled share.
    Recyclable,
    /// The share that is not recycled.
    NonRecyclable,
}

impl WasteType {
    /// Every waste type, in summation order.
    pub const ALL: [Self; 2] = [Self::Recyclable, Self::NonRecyclable];

    /// Selects the factor that applies to this waste type.
    #[must_use]
    pub const fn factor(&self, factors: &SolidWasteEmissionFactor) -> f64 {
        match self {
            Self::Recyclable => factors.recyclable_factor,
            Self::NonRecyclable => factors.non_recyclable_factor,
        }
    }

    /// Returns the fraction of the total waste this type accounts for.
    #[must_use]
    pub fn fraction(&self, recycle_percentage: f64) -> f64 {
        match self {
            Self::Recyclable => recycle_percentage,
            Self::NonRecyclable => 1.0 - recycle_percentage,
        }
    }

    /// Computes `total * fraction * factor` for this waste type.
    #[must_use]
    pub fn emission(
        &self,
        solid_waste_total: f64,
        recycle_percentage: f64,
        factors: &SolidWasteEmissionFactor,
    ) -> f64 {
        solid_waste_total * self.fraction(recycle_percentage) * self.factor(factors)
    }
}

/// Computes the energy emission for a consumption value.
#[must_use]
pub fn energy_emission(energy_consumption: f64, factor: &EnergyEmissionFactor) -> f64 {
    energy_consumption * factor.factor
}

/// Computes the solid waste emission across every waste type.
#[must_use]
pub fn solid_waste_emission(
    solid_waste_total: f64,
    recycle_percentage: f64,
    factors: &SolidWasteEmissionFactor,
) -> f64 {
    WasteType::ALL
        .iter()
        .fold(0.0, |acc, waste_type| {
            acc + waste_type.emission(solid_waste_total, recycle_percentage, factors)
        })
}

/// Finds the factor for a vehicle type in a bulk-fetched factor list.
///
/// The first matching record wins.
#[must_use]
pub fn find_transportation_factor(
    vehicle_type: VehicleType,
    factors: &[TransportationEmissionFactor],
) -> Option<f64> {
    factors
        .iter()
        .find(|f| f.vehicle_type == vehicle_type)
        .map(|f| f.factor)
}

/// The outcome of a carbon calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Emission attributed to energy consumption.
    pub energy: f64,
    /// Emission attributed to transportation.
    pub transportation: f64,
    /// Emission attributed to solid waste.
    pub solid_waste: f64,
    /// Sum of the three sub-totals.
    pub total: f64,
}

impl CalculationResult {
    /// Builds a result from its sub-totals, deriving the total.
    #[must_use]
    pub fn new(energy: f64, transportation: f64, solid_waste: f64) -> Self {
        Self {
            energy,
            transportation,
            solid_waste,
            total: energy + transportation + solid_waste,
        }
    }

    /// A result with every value at zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            energy: 0.0,
            transportation: 0.0,
            solid_waste: 0.0,
            total: 0.0,
        }
    }
}
