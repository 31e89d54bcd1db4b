// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The engine running against a real database.

use carbon_calc::{CalculationUpdate, get_result, start_calculation, update_calculation_info};
use carbon_calc_domain::{
    ActivityUpdate, CalculationId, CalculationResult, IdentityFields, TransportationEntry,
    VehicleType,
};

use crate::Persistence;
use crate::tests::{create_reference_factor_table, create_test_persistence};

fn seeded_persistence() -> Persistence {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .seed_emission_factors(&create_reference_factor_table())
        .unwrap();
    persistence
}

#[test]
fn test_reference_calculation_end_to_end() {
    let mut persistence: Persistence = seeded_persistence();
    let id: CalculationId = start_calculation(
        &mut persistence,
        Some(&IdentityFields::new("Ana", "ana@example.com", "AL", "555-0100")),
    )
    .unwrap();

    let updated: bool = update_calculation_info(
        &mut persistence,
        Some(CalculationUpdate::new(
            id.clone(),
            ActivityUpdate {
                energy_consumption: 10.0,
                transportation: Some(vec![
                    TransportationEntry::new(VehicleType::Car, 100.0),
                    TransportationEntry::new(VehicleType::Motorcycle, 100.0),
                ]),
                solid_waste_total: 1000.0,
                recycle_percentage: 0.5,
            },
        )),
    )
    .unwrap();
    let result: CalculationResult = get_result(&mut persistence, &id).unwrap();

    assert!(updated);
    assert_eq!(result, CalculationResult::new(5.0, 28.0, 690.0));
    assert_eq!(result.total, 723.0);
}

#[test]
fn test_validation_failure_writes_nothing() {
    let mut persistence: Persistence = seeded_persistence();

    let result = start_calculation(
        &mut persistence,
        Some(&IdentityFields {
            region: Some(String::from("  ")),
            ..IdentityFields::new("Ana", "ana@example.com", "AL", "555-0100")
        }),
    );

    assert!(result.is_err());
    assert_eq!(persistence.count_sessions().unwrap(), 0);
}

#[test]
fn test_update_of_unknown_session_writes_nothing() {
    let mut persistence: Persistence = seeded_persistence();

    let updated: bool = update_calculation_info(
        &mut persistence,
        Some(CalculationUpdate::new(
            CalculationId::generate(),
            ActivityUpdate::default(),
        )),
    )
    .unwrap();

    assert!(!updated);
    assert_eq!(persistence.count_sessions().unwrap(), 0);
}

#[test]
fn test_unsupported_region_uses_zero_for_region_factors() {
    let mut persistence: Persistence = seeded_persistence();
    let id: CalculationId = start_calculation(
        &mut persistence,
        Some(&IdentityFields::new("Ana", "ana@example.com", "XX", "555-0100")),
    )
    .unwrap();
    update_calculation_info(
        &mut persistence,
        Some(CalculationUpdate::new(
            id.clone(),
            ActivityUpdate {
                energy_consumption: 10.0,
                transportation: Some(vec![TransportationEntry::new(VehicleType::Car, 100.0)]),
                solid_waste_total: 1000.0,
                recycle_percentage: 0.5,
            },
        )),
    )
    .unwrap();

    let result: CalculationResult = get_result(&mut persistence, &id).unwrap();

    assert_eq!(result.energy, 0.0);
    assert_eq!(result.solid_waste, 0.0);
    assert_eq!(result.transportation, 19.0);
}
