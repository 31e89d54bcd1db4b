// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, IdentityField};

/// Ensures a single identity field is present and not blank.
///
/// Whitespace-only values count as blank.
///
/// # Arguments
///
/// * `value` - The raw field value, `None` when absent
/// * `field` - Which field is being checked, used to tag the error
///
/// # Returns
///
/// * `Ok(&str)` with the original (untrimmed) value when present
/// * `Err(DomainError::Validation)` naming the field otherwise
///
/// # Errors
///
/// Returns an error if the value is `None`, empty, or whitespace-only.
pub fn require_non_blank(value: Option<&str>, field: IdentityField) -> Result<&str, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::Validation {
            field,
            message: String::from(field.required_message()),
        }),
    }
}
