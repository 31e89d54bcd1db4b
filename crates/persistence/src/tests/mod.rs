// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

mod engine_tests;
mod initialization_tests;
mod seed_tests;

use carbon_calc_domain::{
    CalculationSession, EmissionFactorTable, EnergyEmissionFactor, Region,
    SolidWasteEmissionFactor, TransportationEmissionFactor, UserIdentity, VehicleType,
};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn create_test_session() -> CalculationSession {
    let identity: UserIdentity =
        UserIdentity::new("Ana Souza", "ana@example.com", "AL", "+55 82 99999-0000").unwrap();
    CalculationSession::new(identity)
}

pub fn create_reference_factor_table() -> EmissionFactorTable {
    EmissionFactorTable {
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
    }
}
