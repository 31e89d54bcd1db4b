// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The identity fields a calculation session is created from.
///
/// Validation runs in declaration order and stops at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityField {
    /// The user's display name.
    Name,
    /// The user's email address.
    Email,
    /// The user's region code.
    Region,
    /// The user's phone number.
    PhoneNumber,
}

impl IdentityField {
    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Region => "region",
            Self::PhoneNumber => "phone_number",
        }
    }

    /// Returns the message reported when this field is missing or blank.
    #[must_use]
    pub const fn required_message(&self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Email => "Email is required",
            Self::Region => "Region is required",
            Self::PhoneNumber => "Phone number is required",
        }
    }
}

impl std::fmt::Display for IdentityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required identity field is missing or blank.
    Validation {
        /// The first field that failed validation.
        field: IdentityField,
        /// A human-readable description of the failure.
        message: String,
    },
    /// The vehicle type is not one of the supported categories.
    InvalidVehicleType(String),
    /// The persisted lifecycle state is not recognised.
    InvalidLifecycleState(String),
    /// The calculation identifier is empty.
    InvalidCalculationId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Validation failed for '{field}': {message}")
            }
            Self::InvalidVehicleType(value) => write!(f, "Invalid vehicle type: {value}"),
            Self::InvalidLifecycleState(value) => {
                write!(f, "Invalid session lifecycle state: {value}")
            }
            Self::InvalidCalculationId(msg) => write!(f, "Invalid calculation id: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
