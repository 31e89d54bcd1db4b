// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use carbon_calc::EngineError;
use carbon_calc_domain::DomainError;
use carbon_calc_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/engine errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request itself was absent or unusable.
    InvalidRequest {
        /// A human-readable description of the problem.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The backing store failed.
    Persistence(PersistenceError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Persistence(err) => write!(f, "Persistence error: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}

/// Translates a domain error into an API error.
///
/// Every domain error is a problem with caller input.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::Validation { field, message } => ApiError::InvalidInput {
            field: field.as_str().to_string(),
            message,
        },
        DomainError::InvalidVehicleType(value) => ApiError::InvalidInput {
            field: String::from("type"),
            message: format!("Unsupported vehicle type '{value}'"),
        },
        other @ (DomainError::InvalidCalculationId(_) | DomainError::InvalidLifecycleState(_)) => {
            ApiError::InvalidRequest {
                message: other.to_string(),
            }
        }
    }
}

/// Translates an engine error into an API error.
///
/// Store failures keep the original `PersistenceError`.
#[must_use]
pub fn translate_engine_error(err: EngineError<PersistenceError>) -> ApiError {
    match err {
        EngineError::InvalidRequest(message) => ApiError::InvalidRequest {
            message: message.to_string(),
        },
        EngineError::Validation(domain_err) => translate_domain_error(domain_err),
        EngineError::Store(persistence_err) => ApiError::Persistence(persistence_err),
    }
}
