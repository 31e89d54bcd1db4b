// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CalculationResult, EmissionFactorTable, EnergyEmissionFactor, Region,
    SolidWasteEmissionFactor, TransportationEmissionFactor, VehicleType, WasteType,
    energy_emission, find_transportation_factor, solid_waste_emission,
};

fn al_solid_waste_factor() -> SolidWasteEmissionFactor {
    SolidWasteEmissionFactor {
        region: Region::new("AL"),
        recyclable_factor: 0.43,
        non_recyclable_factor: 0.95,
    }
}

#[test]
fn test_energy_emission_multiplies_consumption_by_factor() {
    let factor: EnergyEmissionFactor = EnergyEmissionFactor {
        region: Region::new("AL"),
        factor: 0.5,
    };
    assert!((energy_emission(10.0, &factor) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_waste_type_selects_matching_factor() {
    let factors: SolidWasteEmissionFactor = al_solid_waste_factor();
    assert!((WasteType::Recyclable.factor(&factors) - 0.43).abs() < f64::EPSILON);
    assert!((WasteType::NonRecyclable.factor(&factors) - 0.95).abs() < f64::EPSILON);
}

#[test]
fn test_waste_type_fractions_are_complementary() {
    assert!((WasteType::Recyclable.fraction(0.3) - 0.3).abs() < f64::EPSILON);
    assert!((WasteType::NonRecyclable.fraction(0.3) - 0.7).abs() < f64::EPSILON);
}

#[test]
fn test_solid_waste_emission_matches_reference_example() {
    let factors: SolidWasteEmissionFactor = al_solid_waste_factor();

    let recyclable: f64 = WasteType::Recyclable.emission(1000.0, 0.5, &factors);
    let non_recyclable: f64 = WasteType::NonRecyclable.emission(1000.0, 0.5, &factors);
    assert!((recyclable - 215.0).abs() < 1e-9);
    assert!((non_recyclable - 475.0).abs() < 1e-9);

    assert!((solid_waste_emission(1000.0, 0.5, &factors) - 690.0).abs() < 1e-9);
}

#[test]
fn test_solid_waste_emission_with_nothing_recycled() {
    let factors: SolidWasteEmissionFactor = al_solid_waste_factor();
    assert!((solid_waste_emission(100.0, 0.0, &factors) - 95.0).abs() < 1e-9);
}

#[test]
fn test_find_transportation_factor() {
    let factors: Vec<TransportationEmissionFactor> = vec![
        TransportationEmissionFactor {
            vehicle_type: VehicleType::Car,
            factor: 0.19,
        },
        TransportationEmissionFactor {
            vehicle_type: VehicleType::Motorcycle,
            factor: 0.09,
        },
    ];

    assert_eq!(
        find_transportation_factor(VehicleType::Car, &factors),
        Some(0.19)
    );
    assert_eq!(
        find_transportation_factor(VehicleType::Motorcycle, &factors),
        Some(0.09)
    );
    assert_eq!(
        find_transportation_factor(VehicleType::PublicTransport, &factors),
        None
    );
    assert_eq!(find_transportation_factor(VehicleType::Car, &[]), None);
}

#[test]
fn test_calculation_result_derives_total() {
    let result: CalculationResult = CalculationResult::new(5.0, 28.0, 690.0);
    assert!((result.total - 723.0).abs() < f64::EPSILON);
    assert_eq!(CalculationResult::zero(), CalculationResult::default());
}

#[test]
fn test_emission_factor_table_parses_partial_json() {
    let table: EmissionFactorTable = serde_json::from_str(
        r#"{
            "energy": [{ "region": "al", "factor": 0.5 }],
            "transportation": [{ "vehicle_type": "CAR", "factor": 0.19 }]
        }"#,
    )
    .unwrap();

    assert_eq!(table.energy.len(), 1);
    assert_eq!(table.energy[0].region, Region::new("AL"));
    assert!(table.solid_waste.is_empty());
    assert_eq!(table.transportation[0].vehicle_type, VehicleType::Car);
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
    assert!(EmissionFactorTable::default().is_empty());
}
