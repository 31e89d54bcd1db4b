// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row types.
//!
//! Rows mirror the tables one-to-one. Conversion to and from domain types
//! happens in the query and mutation modules.

use diesel::prelude::*;

use crate::diesel_schema::{
    calculation_sessions, energy_emission_factors, solid_waste_emission_factors,
    transportation_emission_factors, transportation_entries,
};

/// A row of `calculation_sessions`.
///
/// `has_transportation` distinguishes a list that was never supplied from an
/// empty one.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = calculation_sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CalculationSessionRow {
    pub calculation_id: String,
    pub name: String,
    pub email: String,
    pub region: String,
    pub phone_number: String,
    pub energy_consumption: f64,
    pub has_transportation: i32,
    pub solid_waste_total: f64,
    pub recycle_percentage: f64,
    pub lifecycle_state: String,
}

/// A row of `transportation_entries`.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = transportation_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransportationEntryRow {
    pub calculation_id: String,
    pub position: i32,
    pub vehicle_type: String,
    pub monthly_distance: f64,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = energy_emission_factors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EnergyFactorRow {
    pub region: String,
    pub factor: f64,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = solid_waste_emission_factors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SolidWasteFactorRow {
    pub region: String,
    pub recyclable_factor: f64,
    pub non_recyclable_factor: f64,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = transportation_emission_factors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransportationFactorRow {
    pub vehicle_type: String,
    pub factor: f64,
}
