// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the carbon calculator.
//!
//! This crate stores calculation sessions and emission factor reference data
//! in `SQLite` through Diesel. `Persistence` implements the engine's
//! collaborator traits, so it can be handed straight to the engine.
//!
//! ## Migrations
//!
//! Migrations in `migrations/` are embedded in the binary and applied every
//! time a database is opened.
//!
//! ## Testing Philosophy
//!
//! - Tests run against private in-memory databases
//! - Every in-memory instance is isolated from every other

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
#![allow(clippy::multiple_crate_versions)]

use carbon_calc::{
    EnergyFactorLookup, SessionStore, SolidWasteFactorLookup, TransportationFactorLookup,
};
use carbon_calc_domain::{
    CalculationId, CalculationSession, EmissionFactorTable, EnergyEmissionFactor, Region,
    SolidWasteEmissionFactor, TransportationEmissionFactor, TransportationEntry,
};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod seed;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use error::PersistenceError;
pub use seed::{FactorSeedError, load_factor_table, seed_from_file};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` persistence adapter for sessions and emission factors.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database, so instances never see each
    /// other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("carbon_calc_memdb_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Lists the tables created by the migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tables(&mut self) -> Result<Vec<String>, PersistenceError> {
        backend::sqlite::list_tables(&mut self.conn)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Inserts or replaces a calculation session and its transportation entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub fn save_session(&mut self, session: &CalculationSession) -> Result<(), PersistenceError> {
        mutations::sessions::save_session(&mut self.conn, session)
    }

    /// Loads a calculation session.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` for an unknown id.
    pub fn find_session(
        &mut self,
        id: &CalculationId,
    ) -> Result<Option<CalculationSession>, PersistenceError> {
        queries::sessions::find_session(&mut self.conn, id)
    }

    /// Loads the stored transportation entries of a session, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn transportation_entries(
        &mut self,
        id: &CalculationId,
    ) -> Result<Vec<TransportationEntry>, PersistenceError> {
        queries::sessions::load_transportation_entries(&mut self.conn, id)
    }

    /// Counts stored calculation sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_sessions(&mut self) -> Result<i64, PersistenceError> {
        queries::sessions::count_sessions(&mut self.conn)
    }

    // ========================================================================
    // Emission factors
    // ========================================================================

    /// Inserts or replaces the energy factor for a region.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor cannot be written.
    pub fn upsert_energy_factor(
        &mut self,
        factor: &EnergyEmissionFactor,
    ) -> Result<(), PersistenceError> {
        mutations::factors::upsert_energy_factor(&mut self.conn, factor)
    }

    /// Inserts or replaces the solid waste factors for a region.
    ///
    /// # Errors
    ///
    /// Returns an error if the factors cannot be written.
    pub fn upsert_solid_waste_factor(
        &mut self,
        factor: &SolidWasteEmissionFactor,
    ) -> Result<(), PersistenceError> {
        mutations::factors::upsert_solid_waste_factor(&mut self.conn, factor)
    }

    /// Inserts or replaces the factor for a vehicle type.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor cannot be written.
    pub fn upsert_transportation_factor(
        &mut self,
        factor: &TransportationEmissionFactor,
    ) -> Result<(), PersistenceError> {
        mutations::factors::upsert_transportation_factor(&mut self.conn, factor)
    }

    /// Upserts every factor in a table in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any factor cannot be written.
    pub fn seed_emission_factors(
        &mut self,
        table: &EmissionFactorTable,
    ) -> Result<usize, PersistenceError> {
        mutations::factors::seed_emission_factors(&mut self.conn, table)
    }

    /// Retrieves the energy factor for a region.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_energy_factor(
        &mut self,
        region: &Region,
    ) -> Result<Option<EnergyEmissionFactor>, PersistenceError> {
        queries::factors::find_energy_factor(&mut self.conn, region)
    }

    /// Retrieves the solid waste factors for a region.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_solid_waste_factor(
        &mut self,
        region: &Region,
    ) -> Result<Option<SolidWasteEmissionFactor>, PersistenceError> {
        queries::factors::find_solid_waste_factor(&mut self.conn, region)
    }

    /// Lists every transportation factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_transportation_factors(
        &mut self,
    ) -> Result<Vec<TransportationEmissionFactor>, PersistenceError> {
        queries::factors::list_transportation_factors(&mut self.conn)
    }
}

impl SessionStore for Persistence {
    type Error = PersistenceError;

    fn save(&mut self, session: &CalculationSession) -> Result<(), PersistenceError> {
        self.save_session(session)
    }

    fn find_by_id(
        &mut self,
        id: &CalculationId,
    ) -> Result<Option<CalculationSession>, PersistenceError> {
        self.find_session(id)
    }
}

impl EnergyFactorLookup for Persistence {
    type Error = PersistenceError;

    fn energy_factor(
        &mut self,
        region: &Region,
    ) -> Result<Option<EnergyEmissionFactor>, PersistenceError> {
        self.get_energy_factor(region)
    }
}

impl TransportationFactorLookup for Persistence {
    type Error = PersistenceError;

    fn transportation_factors(
        &mut self,
    ) -> Result<Vec<TransportationEmissionFactor>, PersistenceError> {
        self.list_transportation_factors()
    }
}

impl SolidWasteFactorLookup for Persistence {
    type Error = PersistenceError;

    fn solid_waste_factor(
        &mut self,
        region: &Region,
    ) -> Result<Option<SolidWasteEmissionFactor>, PersistenceError> {
        self.get_solid_waste_factor(region)
    }
}
