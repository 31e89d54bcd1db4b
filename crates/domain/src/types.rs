// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, IdentityField};
use crate::validation::require_non_blank;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The opaque identifier of a calculation session.
///
/// Generated identifiers are random v4 UUIDs rendered as 32 lower-case hex
/// characters. Identifiers received from callers are lower-cased so lookups
/// are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalculationId {
    value: String,
}

impl CalculationId {
    /// Generates a new, unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            value: uuid::Uuid::new_v4().simple().to_string(),
        }
    }

    /// Creates an identifier from a caller-supplied value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or whitespace-only.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCalculationId(String::from(
                "Calculation id cannot be empty",
            )));
        }
        Ok(Self {
            value: trimmed.to_lowercase(),
        })
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for CalculationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CalculationId> for String {
    fn from(id: CalculationId) -> Self {
        id.value
    }
}

impl std::fmt::Display for CalculationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a region code.
///
/// Region codes key the energy and solid-waste emission factors. They are
/// trimmed and normalized to uppercase so "al" and "AL" are the same region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Region {
    code: String,
}

impl Region {
    /// Creates a new `Region`, normalizing the code.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self {
            code: code.trim().to_uppercase(),
        }
    }

    /// Returns the normalized region code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl From<String> for Region {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.code
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// The vehicle categories a transportation entry may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    /// Private car.
    Car,
    /// Motorcycle.
    Motorcycle,
    /// Bus, train, subway and similar shared transport.
    PublicTransport,
}

impl VehicleType {
    /// Converts this vehicle type to its canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Motorcycle => "MOTORCYCLE",
            Self::PublicTransport => "PUBLIC_TRANSPORT",
        }
    }
}

impl FromStr for VehicleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CAR" => Ok(Self::Car),
            "MOTORCYCLE" => Ok(Self::Motorcycle),
            "PUBLIC_TRANSPORT" => Ok(Self::PublicTransport),
            _ => Err(DomainError::InvalidVehicleType(s.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single monthly transportation entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportationEntry {
    /// The vehicle category used.
    pub vehicle_type: VehicleType,
    /// Distance travelled per month, in kilometres.
    pub monthly_distance: f64,
}

impl TransportationEntry {
    /// Creates a new transportation entry.
    #[must_use]
    pub const fn new(vehicle_type: VehicleType, monthly_distance: f64) -> Self {
        Self {
            vehicle_type,
            monthly_distance,
        }
    }
}

/// Raw, unvalidated identity fields as received from a caller.
///
/// Any field may be absent. `UserIdentity::from_fields` is the only way to
/// turn these into a usable identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFields {
    /// The user's name.
    pub name: Option<String>,
    /// The user's email address.
    pub email: Option<String>,
    /// The user's region code.
    pub region: Option<String>,
    /// The user's phone number.
    pub phone_number: Option<String>,
}

impl IdentityFields {
    /// Creates a fully populated set of identity fields.
    #[must_use]
    pub fn new(name: &str, email: &str, region: &str, phone_number: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            region: Some(region.to_string()),
            phone_number: Some(phone_number.to_string()),
        }
    }
}

/// The validated identity of the user a calculation belongs to.
///
/// Instances only exist once every field has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    name: String,
    email: String,
    region: Region,
    phone_number: String,
}

impl UserIdentity {
    /// Validates raw identity fields and builds a `UserIdentity`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first missing or blank
    /// field, checked in the order name, email, region, phone number.
    pub fn from_fields(fields: &IdentityFields) -> Result<Self, DomainError> {
        let name: &str = require_non_blank(fields.name.as_deref(), IdentityField::Name)?;
        let email: &str = require_non_blank(fields.email.as_deref(), IdentityField::Email)?;
        let region: &str = require_non_blank(fields.region.as_deref(), IdentityField::Region)?;
        let phone_number: &str =
            require_non_blank(fields.phone_number.as_deref(), IdentityField::PhoneNumber)?;

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            region: Region::new(region),
            phone_number: phone_number.to_string(),
        })
    }

    /// Builds a `UserIdentity` from present values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any value is blank.
    pub fn new(
        name: &str,
        email: &str,
        region: &str,
        phone_number: &str,
    ) -> Result<Self, DomainError> {
        Self::from_fields(&IdentityFields::new(name, email, region, phone_number))
    }

    /// Returns the user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the user's region.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the user's phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}
