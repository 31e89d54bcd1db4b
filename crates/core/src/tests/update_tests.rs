// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    FakeBackend, FakeStoreError, create_reference_update, create_test_identity_fields,
};
use crate::{CalculationUpdate, EngineError, start_calculation, update_calculation_info};
use carbon_calc_domain::{
    ActivityUpdate, CalculationId, CalculationSession, SessionLifecycle, TransportationEntry,
    VehicleType,
};

fn started_backend() -> (FakeBackend, CalculationId) {
    let mut backend: FakeBackend = FakeBackend::default();
    let id: CalculationId =
        start_calculation(&mut backend, Some(&create_test_identity_fields())).unwrap();
    backend.save_calls = 0;
    (backend, id)
}

#[test]
fn test_update_overwrites_activity_and_saves() {
    let (mut backend, id) = started_backend();

    let updated: bool = update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(id.clone(), create_reference_update())),
    )
    .unwrap();

    assert!(updated);
    assert_eq!(backend.save_calls, 1);
    let session: &CalculationSession = &backend.sessions[&id];
    assert_eq!(session.energy_consumption(), 10.0);
    assert_eq!(session.solid_waste_total(), 1000.0);
    assert_eq!(session.recycle_percentage(), 0.5);
    assert_eq!(session.transportation_or_empty().len(), 2);
    assert_eq!(session.lifecycle(), SessionLifecycle::Updated);
}

#[test]
fn test_update_unknown_id_returns_false_without_saving() {
    let mut backend: FakeBackend = FakeBackend::default();

    let updated: bool = update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(
            CalculationId::new("does-not-exist").unwrap(),
            create_reference_update(),
        )),
    )
    .unwrap();

    assert!(!updated);
    assert_eq!(backend.save_calls, 0);
}

#[test]
fn test_update_without_request_is_invalid() {
    let (mut backend, _) = started_backend();

    let result: Result<bool, EngineError<FakeStoreError>> =
        update_calculation_info(&mut backend, None);

    assert!(matches!(result, Err(EngineError::InvalidRequest(_))));
    assert_eq!(backend.save_calls, 0);
}

#[test]
fn test_update_with_null_list_keeps_existing_entries() {
    let (mut backend, id) = started_backend();
    update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(id.clone(), create_reference_update())),
    )
    .unwrap();

    update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(
            id.clone(),
            ActivityUpdate {
                energy_consumption: 3.0,
                transportation: None,
                solid_waste_total: 2.0,
                recycle_percentage: 0.25,
            },
        )),
    )
    .unwrap();

    let session: &CalculationSession = &backend.sessions[&id];
    assert_eq!(session.energy_consumption(), 3.0);
    assert_eq!(
        session.transportation(),
        create_reference_update().transportation.as_deref()
    );
}

#[test]
fn test_update_with_null_list_leaves_absent_list_absent() {
    let (mut backend, id) = started_backend();

    update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(id.clone(), ActivityUpdate::default())),
    )
    .unwrap();

    assert!(backend.sessions[&id].transportation().is_none());
}

#[test]
fn test_update_with_list_replaces_entries_entirely() {
    let (mut backend, id) = started_backend();
    update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(id.clone(), create_reference_update())),
    )
    .unwrap();

    let replacement: Vec<TransportationEntry> =
        vec![TransportationEntry::new(VehicleType::PublicTransport, 42.0)];
    update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(
            id.clone(),
            ActivityUpdate {
                transportation: Some(replacement.clone()),
                ..ActivityUpdate::default()
            },
        )),
    )
    .unwrap();

    assert_eq!(
        backend.sessions[&id].transportation(),
        Some(replacement.as_slice())
    );
}

#[test]
fn test_update_propagates_lookup_failure() {
    let (mut backend, id) = started_backend();
    backend.fail_lookups = Some(FakeStoreError(String::from("connection lost")));

    let result: Result<bool, EngineError<FakeStoreError>> = update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(id, create_reference_update())),
    );

    assert_eq!(
        result,
        Err(EngineError::Store(FakeStoreError(String::from(
            "connection lost"
        ))))
    );
    assert_eq!(backend.save_calls, 0);
}

#[test]
fn test_update_propagates_save_failure() {
    let (mut backend, id) = started_backend();
    backend.fail_saves = Some(FakeStoreError(String::from("disk full")));

    let result: Result<bool, EngineError<FakeStoreError>> = update_calculation_info(
        &mut backend,
        Some(CalculationUpdate::new(id.clone(), create_reference_update())),
    );

    assert_eq!(
        result,
        Err(EngineError::Store(FakeStoreError(String::from("disk full"))))
    );
    assert_eq!(backend.save_calls, 1);
    assert_eq!(backend.sessions[&id].energy_consumption(), 0.0);
}
