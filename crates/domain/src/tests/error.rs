// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, IdentityField};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::Validation {
        field: IdentityField::Email,
        message: String::from("Email is required"),
    };
    assert_eq!(
        format!("{err}"),
        "Validation failed for 'email': Email is required"
    );

    let err: DomainError = DomainError::InvalidVehicleType(String::from("BOAT"));
    assert_eq!(format!("{err}"), "Invalid vehicle type: BOAT");

    let err: DomainError = DomainError::InvalidLifecycleState(String::from("Deleted"));
    assert_eq!(format!("{err}"), "Invalid session lifecycle state: Deleted");

    let err: DomainError = DomainError::InvalidCalculationId(String::from("empty"));
    assert_eq!(format!("{err}"), "Invalid calculation id: empty");
}

#[test]
fn test_identity_field_wire_names() {
    assert_eq!(IdentityField::Name.as_str(), "name");
    assert_eq!(IdentityField::Email.as_str(), "email");
    assert_eq!(IdentityField::Region.as_str(), "region");
    assert_eq!(IdentityField::PhoneNumber.as_str(), "phone_number");
}
