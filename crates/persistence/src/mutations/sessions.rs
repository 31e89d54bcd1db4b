// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calculation session mutations.

use carbon_calc_domain::{CalculationSession, TransportationEntry};
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel::{Connection, SqliteConnection};
use tracing::debug;

use crate::data_models::{CalculationSessionRow, TransportationEntryRow};
use crate::diesel_schema::{calculation_sessions, transportation_entries};
use crate::error::PersistenceError;

/// Inserts or replaces a calculation session.
///
/// The session row is upserted and its transportation entries are replaced
/// wholesale, all in one transaction. Entry order is kept through the
/// `position` column.
///
/// # Errors
///
/// Returns an error if any statement fails. Nothing is written in that case.
pub fn save_session(
    conn: &mut SqliteConnection,
    session: &CalculationSession,
) -> Result<(), PersistenceError> {
    let row: CalculationSessionRow = session_row(session);
    let entries: Vec<TransportationEntryRow> =
        entry_rows(&row.calculation_id, session.transportation_or_empty())?;

    conn.transaction::<(), PersistenceError, _>(|conn| {
        diesel::insert_into(calculation_sessions::table)
            .values(&row)
            .on_conflict(calculation_sessions::calculation_id)
            .do_update()
            .set((
                calculation_sessions::name.eq(excluded(calculation_sessions::name)),
                calculation_sessions::email.eq(excluded(calculation_sessions::email)),
                calculation_sessions::region.eq(excluded(calculation_sessions::region)),
                calculation_sessions::phone_number
                    .eq(excluded(calculation_sessions::phone_number)),
                calculation_sessions::energy_consumption
                    .eq(excluded(calculation_sessions::energy_consumption)),
                calculation_sessions::has_transportation
                    .eq(excluded(calculation_sessions::has_transportation)),
                calculation_sessions::solid_waste_total
                    .eq(excluded(calculation_sessions::solid_waste_total)),
                calculation_sessions::recycle_percentage
                    .eq(excluded(calculation_sessions::recycle_percentage)),
                calculation_sessions::lifecycle_state
                    .eq(excluded(calculation_sessions::lifecycle_state)),
            ))
            .execute(conn)?;

        diesel::delete(
            transportation_entries::table
                .filter(transportation_entries::calculation_id.eq(&row.calculation_id)),
        )
        .execute(conn)?;

        if !entries.is_empty() {
            diesel::insert_into(transportation_entries::table)
                .values(&entries)
                .execute(conn)?;
        }

        Ok(())
    })?;

    debug!(
        "Saved calculation session {} with {} transportation entries",
        row.calculation_id,
        entries.len()
    );
    Ok(())
}

fn session_row(session: &CalculationSession) -> CalculationSessionRow {
    let identity = session.identity();
    CalculationSessionRow {
        calculation_id: session.id().value().to_string(),
        name: identity.name().to_string(),
        email: identity.email().to_string(),
        region: identity.region().code().to_string(),
        phone_number: identity.phone_number().to_string(),
        energy_consumption: session.energy_consumption(),
        has_transportation: i32::from(session.transportation().is_some()),
        solid_waste_total: session.solid_waste_total(),
        recycle_percentage: session.recycle_percentage(),
        lifecycle_state: session.lifecycle().as_str().to_string(),
    }
}

fn entry_rows(
    calculation_id: &str,
    entries: &[TransportationEntry],
) -> Result<Vec<TransportationEntryRow>, PersistenceError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let position: i32 = i32::try_from(index).map_err(|_| {
                PersistenceError::QueryFailed(format!(
                    "Transportation entry position {index} out of range"
                ))
            })?;
            Ok(TransportationEntryRow {
                calculation_id: calculation_id.to_string(),
                position,
                vehicle_type: entry.vehicle_type.as_str().to_string(),
                monthly_distance: entry.monthly_distance,
            })
        })
        .collect()
}
