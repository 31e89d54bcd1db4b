// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ports::{EnergyFactorLookup, SolidWasteFactorLookup, TransportationFactorLookup};
use carbon_calc_domain::{
    CalculationResult, CalculationSession, TransportationEmissionFactor, energy_emission,
    find_transportation_factor, solid_waste_emission,
};
use tracing::{debug, warn};

/// Computes the energy sub-total for a session.
///
/// A region without an energy factor contributes zero and logs a warning.
///
/// # Errors
///
/// Returns the lookup's error if the factor cannot be resolved.
pub fn calculate_energy<L: EnergyFactorLookup>(
    lookup: &mut L,
    session: &CalculationSession,
) -> Result<f64, L::Error> {
    let region = session.identity().region();
    match lookup.energy_factor(region)? {
        Some(factor) => Ok(energy_emission(session.energy_consumption(), &factor)),
        None => {
            warn!(region = %region, "Unsupported region: no energy emission factor");
            Ok(0.0)
        }
    }
}

/// Computes the transportation sub-total for a session.
///
/// Factors are fetched once. Entries are summed in stored order and an entry
/// whose vehicle type has no factor contributes zero.
///
/// # Errors
///
/// Returns the lookup's error if the factors cannot be resolved.
pub fn calculate_transportation<L: TransportationFactorLookup>(
    lookup: &mut L,
    session: &CalculationSession,
) -> Result<f64, L::Error> {
    let entries = session.transportation_or_empty();
    if entries.is_empty() {
        return Ok(0.0);
    }

    let factors: Vec<TransportationEmissionFactor> = lookup.transportation_factors()?;
    debug!(
        entries = entries.len(),
        factors = factors.len(),
        "Resolved transportation factors"
    );

    Ok(entries.iter().fold(0.0, |acc, entry| {
        match find_transportation_factor(entry.vehicle_type, &factors) {
            Some(factor) => acc + entry.monthly_distance * factor,
            None => {
                warn!(
                    vehicle_type = %entry.vehicle_type,
                    "Unsupported vehicle type: no transportation emission factor"
                );
                acc
            }
        }
    }))
}

/// Computes the solid waste sub-total for a session.
///
/// # Errors
///
/// Returns the lookup's error if the factors cannot be resolved.
pub fn calculate_solid_waste<L: SolidWasteFactorLookup>(
    lookup: &mut L,
    session: &CalculationSession,
) -> Result<f64, L::Error> {
    let region = session.identity().region();
    match lookup.solid_waste_factor(region)? {
        Some(factors) => Ok(solid_waste_emission(
            session.solid_waste_total(),
            session.recycle_percentage(),
            &factors,
        )),
        None => {
            warn!(region = %region, "Unsupported region: no solid waste emission factor");
            Ok(0.0)
        }
    }
}

/// Computes every sub-total and the grand total for a session.
///
/// # Errors
///
/// Returns the first lookup error encountered.
pub fn calculate<B, E>(backend: &mut B, session: &CalculationSession) -> Result<CalculationResult, E>
where
    B: EnergyFactorLookup<Error = E>
        + TransportationFactorLookup<Error = E>
        + SolidWasteFactorLookup<Error = E>,
{
    let energy: f64 = calculate_energy(backend, session)?;
    let transportation: f64 = calculate_transportation(backend, session)?;
    let solid_waste: f64 = calculate_solid_waste(backend, session)?;
    Ok(CalculationResult::new(energy, transportation, solid_waste))
}
