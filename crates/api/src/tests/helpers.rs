// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use carbon_calc_domain::{
    EmissionFactorTable, EnergyEmissionFactor, Region, SolidWasteEmissionFactor,
    TransportationEmissionFactor, VehicleType,
};
use carbon_calc_persistence::Persistence;

use crate::{StartCalculationRequest, TransportationItem, UpdateCalculationRequest};

pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .seed_emission_factors(&EmissionFactorTable {
            energy: vec![EnergyEmissionFactor {
                region: Region::new("AL"),
                factor: 0.5,
            }],
            solid_waste: vec![SolidWasteEmissionFactor {
                region: Region::new("AL"),
                recyclable_factor: 0.43,
                non_recyclable_factor: 0.95,
            }],
            transportation: vec![
                TransportationEmissionFactor {
                    vehicle_type: VehicleType::Car,
                    factor: 0.19,
                },
                TransportationEmissionFactor {
                    vehicle_type: VehicleType::Motorcycle,
                    factor: 0.09,
                },
            ],
        })
        .unwrap();
    persistence
}

pub fn create_valid_start_request() -> StartCalculationRequest {
    StartCalculationRequest {
        name: Some(String::from("Ana Souza")),
        email: Some(String::from("ana@example.com")),
        region: Some(String::from("AL")),
        phone_number: Some(String::from("+55 82 99999-0000")),
    }
}

pub fn create_reference_update(id: &str) -> UpdateCalculationRequest {
    UpdateCalculationRequest {
        id: id.to_string(),
        energy_consumption: 10.0,
        transportation: Some(vec![
            TransportationItem {
                vehicle_type: String::from("CAR"),
                monthly_distance: 100.0,
            },
            TransportationItem {
                vehicle_type: String::from("MOTORCYCLE"),
                monthly_distance: 100.0,
            },
        ]),
        solid_waste_total: 1000.0,
        recycle_percentage: 0.5,
    }
}
