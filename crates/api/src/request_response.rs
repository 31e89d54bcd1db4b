// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw caller values. Parsing and validation happen in the
//! handlers, so a transport can build these without knowing any rules.

use carbon_calc_domain::CalculationResult;

/// API request to start a new calculation.
///
/// Any field may be absent; the engine reports the first missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartCalculationRequest {
    /// The user's name.
    pub name: Option<String>,
    /// The user's email address.
    pub email: Option<String>,
    /// The user's region code.
    pub region: Option<String>,
    /// The user's phone number.
    pub phone_number: Option<String>,
}

/// API response for a started calculation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StartCalculationResponse {
    /// The identifier of the new calculation session.
    pub id: String,
}

/// One transportation entry as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportationItem {
    /// The vehicle type name (`CAR`, `MOTORCYCLE`, `PUBLIC_TRANSPORT`).
    pub vehicle_type: String,
    /// Monthly distance in kilometres.
    pub monthly_distance: f64,
}

/// API request to replace the activity values of a calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCalculationRequest {
    /// The calculation to update.
    pub id: String,
    /// Household energy consumption in kWh.
    pub energy_consumption: f64,
    /// Replacement transportation entries, `None` to keep the current list.
    pub transportation: Option<Vec<TransportationItem>>,
    /// Solid waste produced, in kg.
    pub solid_waste_total: f64,
    /// Fraction of the solid waste that is recycled.
    pub recycle_percentage: f64,
}

/// API response for an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateCalculationResponse {
    /// `false` when no calculation had the requested identifier.
    pub success: bool,
}

/// API response carrying a computed footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalculationResultResponse {
    /// Emission attributed to energy consumption.
    pub energy: f64,
    /// Emission attributed to transportation.
    pub transportation: f64,
    /// Emission attributed to solid waste.
    pub solid_waste: f64,
    /// Sum of the three sub-totals.
    pub total: f64,
}

impl From<CalculationResult> for CalculationResultResponse {
    fn from(result: CalculationResult) -> Self {
        Self {
            energy: result.energy,
            transportation: result.transportation,
            solid_waste: result.solid_waste,
            total: result.total,
        }
    }
}
