// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Region, VehicleType};
use serde::{Deserialize, Serialize};

/// Energy emission factor for a region (per kWh).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEmissionFactor {
    /// The region this factor applies to.
    pub region: Region,
    /// The multiplier applied to energy consumption.
    pub factor: f64,
}

/// Solid waste emission factors for a region (per kg).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidWasteEmissionFactor {
    /// The region these factors apply to.
    pub region: Region,
    /// Multiplier for the recycled share of the waste.
    pub recyclable_factor: f64,
    /// Multiplier for the non-recycled share of the waste.
    pub non_recyclable_factor: f64,
}

/// Transportation emission factor for a vehicle type (per km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportationEmissionFactor {
    /// The vehicle type this factor applies to.
    pub vehicle_type: VehicleType,
    /// The multiplier applied to monthly distance.
    pub factor: f64,
}

/// A bundle of emission factor reference data.
///
/// Used to seed a record store. Missing sections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactorTable {
    /// Energy factors keyed by region.
    pub energy: Vec<EnergyEmissionFactor>,
    /// Solid waste factors keyed by region.
    pub solid_waste: Vec<SolidWasteEmissionFactor>,
    /// Transportation factors keyed by vehicle type.
    pub transportation: Vec<TransportationEmissionFactor>,
}

impl EmissionFactorTable {
    /// Returns the total number of factor records in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.energy.len() + self.solid_waste.len() + self.transportation.len()
    }

    /// Returns whether the table holds no factor records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
