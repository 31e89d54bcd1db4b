// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator contracts consumed by the calculation engine.
//!
//! The engine never talks to a database directly. Anything that can store
//! sessions and resolve emission factors can back it.

use carbon_calc_domain::{
    CalculationId, CalculationSession, EnergyEmissionFactor, Region, SolidWasteEmissionFactor,
    TransportationEmissionFactor,
};

/// Resolves the energy emission factor for a region.
pub trait EnergyFactorLookup {
    /// The error raised when the lookup itself fails.
    type Error: std::error::Error;

    /// Returns the factor for `region`, or `None` if the region is not supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be queried.
    fn energy_factor(&mut self, region: &Region)
    -> Result<Option<EnergyEmissionFactor>, Self::Error>;
}

/// Resolves transportation emission factors.
///
/// All factors are fetched in one call and filtered by the caller.
pub trait TransportationFactorLookup {
    /// The error raised when the lookup itself fails.
    type Error: std::error::Error;

    /// Returns every known transportation factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be queried.
    fn transportation_factors(&mut self) -> Result<Vec<TransportationEmissionFactor>, Self::Error>;
}

/// Resolves the solid waste emission factors for a region.
pub trait SolidWasteFactorLookup {
    /// The error raised when the lookup itself fails.
    type Error: std::error::Error;

    /// Returns the factors for `region`, or `None` if the region is not supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be queried.
    fn solid_waste_factor(
        &mut self,
        region: &Region,
    ) -> Result<Option<SolidWasteEmissionFactor>, Self::Error>;
}

/// Durable storage for calculation sessions.
pub trait SessionStore {
    /// The error raised when a storage operation fails.
    type Error: std::error::Error;

    /// Inserts or replaces a session, including its transportation entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    fn save(&mut self, session: &CalculationSession) -> Result<(), Self::Error>;

    /// Loads a session by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried. An unknown identifier
    /// is `Ok(None)`, not an error.
    fn find_by_id(&mut self, id: &CalculationId)
    -> Result<Option<CalculationSession>, Self::Error>;
}
