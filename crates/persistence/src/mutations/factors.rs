// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Emission factor mutations.
//!
//! Factors are reference data. Writing a factor for a region or vehicle type
//! that already has one overwrites it.

use carbon_calc_domain::{
    EmissionFactorTable, EnergyEmissionFactor, SolidWasteEmissionFactor,
    TransportationEmissionFactor,
};
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel::{Connection, SqliteConnection};
use tracing::info;

use crate::data_models::{EnergyFactorRow, SolidWasteFactorRow, TransportationFactorRow};
use crate::diesel_schema::{
    energy_emission_factors, solid_waste_emission_factors, transportation_emission_factors,
};
use crate::error::PersistenceError;

/// Inserts or replaces the energy factor for a region.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn upsert_energy_factor(
    conn: &mut SqliteConnection,
    factor: &EnergyEmissionFactor,
) -> Result<(), PersistenceError> {
    let row: EnergyFactorRow = EnergyFactorRow {
        region: factor.region.code().to_string(),
        factor: factor.factor,
    };

    diesel::insert_into(energy_emission_factors::table)
        .values(&row)
        .on_conflict(energy_emission_factors::region)
        .do_update()
        .set(energy_emission_factors::factor.eq(excluded(energy_emission_factors::factor)))
        .execute(conn)?;
    Ok(())
}

/// Inserts or replaces the solid waste factors for a region.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn upsert_solid_waste_factor(
    conn: &mut SqliteConnection,
    factor: &SolidWasteEmissionFactor,
) -> Result<(), PersistenceError> {
    let row: SolidWasteFactorRow = SolidWasteFactorRow {
        region: factor.region.code().to_string(),
        recyclable_factor: factor.recyclable_factor,
        non_recyclable_factor: factor.non_recyclable_factor,
    };

    diesel::insert_into(solid_waste_emission_factors::table)
        .values(&row)
        .on_conflict(solid_waste_emission_factors::region)
        .do_update()
        .set((
            solid_waste_emission_factors::recyclable_factor
                .eq(excluded(solid_waste_emission_factors::recyclable_factor)),
            solid_waste_emission_factors::non_recyclable_factor
                .eq(excluded(solid_waste_emission_factors::non_recyclable_factor)),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts or replaces the factor for a vehicle type.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn upsert_transportation_factor(
    conn: &mut SqliteConnection,
    factor: &TransportationEmissionFactor,
) -> Result<(), PersistenceError> {
    let row: TransportationFactorRow = TransportationFactorRow {
        vehicle_type: factor.vehicle_type.as_str().to_string(),
        factor: factor.factor,
    };

    diesel::insert_into(transportation_emission_factors::table)
        .values(&row)
        .on_conflict(transportation_emission_factors::vehicle_type)
        .do_update()
        .set(
            transportation_emission_factors::factor
                .eq(excluded(transportation_emission_factors::factor)),
        )
        .execute(conn)?;
    Ok(())
}

/// Writes every factor in a table, in one transaction.
///
/// # Returns
///
/// The number of factor records written.
///
/// # Errors
///
/// Returns an error if any write fails. Nothing is written in that case.
pub fn seed_emission_factors(
    conn: &mut SqliteConnection,
    table: &EmissionFactorTable,
) -> Result<usize, PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        for factor in &table.energy {
            upsert_energy_factor(conn, factor)?;
        }
        for factor in &table.solid_waste {
            upsert_solid_waste_factor(conn, factor)?;
        }
        for factor in &table.transportation {
            upsert_transportation_factor(conn, factor)?;
        }
        Ok(())
    })?;

    info!(
        energy = table.energy.len(),
        solid_waste = table.solid_waste.len(),
        transportation = table.transportation.len(),
        "Seeded emission factors"
    );
    Ok(table.len())
}
