// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calculation session queries.

use carbon_calc_domain::{
    ActivityUpdate, CalculationId, CalculationSession, SessionLifecycle, TransportationEntry,
    UserIdentity, VehicleType,
};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{CalculationSessionRow, TransportationEntryRow};
use crate::diesel_schema::{calculation_sessions, transportation_entries};
use crate::error::PersistenceError;

/// Loads a calculation session and its transportation entries.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row cannot be
/// turned back into a session. Returns `Ok(None)` if the session is not found.
pub fn find_session(
    conn: &mut SqliteConnection,
    id: &CalculationId,
) -> Result<Option<CalculationSession>, PersistenceError> {
    debug!("Looking up calculation session: {}", id);

    let row: Option<CalculationSessionRow> = calculation_sessions::table
        .filter(calculation_sessions::calculation_id.eq(id.value()))
        .select(CalculationSessionRow::as_select())
        .first(conn)
        .optional()?;

    let Some(row) = row else {
        return Ok(None);
    };

    let transportation: Option<Vec<TransportationEntry>> = if row.has_transportation == 0 {
        None
    } else {
        Some(load_transportation_entries(conn, id)?)
    };

    session_from_row(row, transportation).map(Some)
}

/// Loads the transportation entries of a session in stored order.
///
/// # Errors
///
/// Returns an error if the query fails or a vehicle type is unrecognised.
pub fn load_transportation_entries(
    conn: &mut SqliteConnection,
    id: &CalculationId,
) -> Result<Vec<TransportationEntry>, PersistenceError> {
    let rows: Vec<TransportationEntryRow> = transportation_entries::table
        .filter(transportation_entries::calculation_id.eq(id.value()))
        .order(transportation_entries::position.asc())
        .select(TransportationEntryRow::as_select())
        .load(conn)?;

    let mut entries: Vec<TransportationEntry> = Vec::with_capacity(rows.len());
    for row in rows {
        let vehicle_type: VehicleType = row.vehicle_type.parse()?;
        entries.push(TransportationEntry::new(vehicle_type, row.monthly_distance));
    }
    Ok(entries)
}

/// Counts stored calculation sessions.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_sessions(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(calculation_sessions::table.count().get_result(conn)?)
}

fn session_from_row(
    row: CalculationSessionRow,
    transportation: Option<Vec<TransportationEntry>>,
) -> Result<CalculationSession, PersistenceError> {
    let id: CalculationId = CalculationId::new(&row.calculation_id)?;
    let identity: UserIdentity =
        UserIdentity::new(&row.name, &row.email, &row.region, &row.phone_number)?;
    let lifecycle: SessionLifecycle = row.lifecycle_state.parse()?;

    Ok(CalculationSession::restore(
        id,
        identity,
        lifecycle,
        ActivityUpdate {
            energy_consumption: row.energy_consumption,
            transportation,
            solid_waste_total: row.solid_waste_total,
            recycle_percentage: row.recycle_percentage,
        },
    ))
}
