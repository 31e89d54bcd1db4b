// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use carbon_calc_domain::DomainError;

/// Errors that can occur while running an engine operation.
///
/// `E` is the error type of the backing store, carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError<E> {
    /// The request itself was absent.
    InvalidRequest(&'static str),
    /// A domain rule was violated.
    Validation(DomainError),
    /// The backing store failed.
    Store(E),
}

impl<E: std::fmt::Display> std::fmt::Display for EngineError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(msg) => write!(f, "Invalid request: {msg}"),
            Self::Validation(err) => write!(f, "Domain violation: {err}"),
            Self::Store(err) => write!(f, "Store failure: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for EngineError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRequest(_) => None,
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl<E> From<DomainError> for EngineError<E> {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}
