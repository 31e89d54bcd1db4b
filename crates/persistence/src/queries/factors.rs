// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Emission factor queries.

use carbon_calc_domain::{
    EnergyEmissionFactor, Region, SolidWasteEmissionFactor, TransportationEmissionFactor,
    VehicleType,
};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{EnergyFactorRow, SolidWasteFactorRow, TransportationFactorRow};
use crate::diesel_schema::{
    energy_emission_factors, solid_waste_emission_factors, transportation_emission_factors,
};
use crate::error::PersistenceError;

/// Retrieves the energy emission factor for a region.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the region has no factor.
pub fn find_energy_factor(
    conn: &mut SqliteConnection,
    region: &Region,
) -> Result<Option<EnergyEmissionFactor>, PersistenceError> {
    debug!("Looking up energy emission factor for region: {}", region);

    let row: Option<EnergyFactorRow> = energy_emission_factors::table
        .filter(energy_emission_factors::region.eq(region.code()))
        .select(EnergyFactorRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| EnergyEmissionFactor {
        region: Region::new(&row.region),
        factor: row.factor,
    }))
}

/// Retrieves the solid waste emission factors for a region.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the region has no factors.
pub fn find_solid_waste_factor(
    conn: &mut SqliteConnection,
    region: &Region,
) -> Result<Option<SolidWasteEmissionFactor>, PersistenceError> {
    debug!("Looking up solid waste emission factors for region: {}", region);

    let row: Option<SolidWasteFactorRow> = solid_waste_emission_factors::table
        .filter(solid_waste_emission_factors::region.eq(region.code()))
        .select(SolidWasteFactorRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| SolidWasteEmissionFactor {
        region: Region::new(&row.region),
        recyclable_factor: row.recyclable_factor,
        non_recyclable_factor: row.non_recyclable_factor,
    }))
}

/// Lists every transportation emission factor, ordered by vehicle type.
///
/// # Errors
///
/// Returns an error if the query fails or a stored vehicle type is
/// unrecognised.
pub fn list_transportation_factors(
    conn: &mut SqliteConnection,
) -> Result<Vec<TransportationEmissionFactor>, PersistenceError> {
    let rows: Vec<TransportationFactorRow> = transportation_emission_factors::table
        .order(transportation_emission_factors::vehicle_type.asc())
        .select(TransportationFactorRow::as_select())
        .load(conn)?;

    debug!("Loaded {} transportation emission factors", rows.len());

    let mut factors: Vec<TransportationEmissionFactor> = Vec::with_capacity(rows.len());
    for row in rows {
        let vehicle_type: VehicleType = row.vehicle_type.parse()?;
        factors.push(TransportationEmissionFactor {
            vehicle_type,
            factor: row.factor,
        });
    }
    Ok(factors)
}
