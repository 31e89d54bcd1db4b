// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use carbon_calc_domain::{EmissionFactorTable, Region, VehicleType};

use crate::tests::create_test_persistence;
use crate::{FactorSeedError, Persistence, load_factor_table, seed_from_file};

static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn write_seed_file(contents: &str) -> PathBuf {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "carbon-calc-seed-{}-{}.json",
        std::process::id(),
        FILE_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

const SEED_JSON: &str = r#"{
    "energy": [{ "region": "al", "factor": 0.5 }],
    "solid_waste": [
        { "region": "AL", "recyclable_factor": 0.43, "non_recyclable_factor": 0.95 }
    ],
    "transportation": [
        { "vehicle_type": "CAR", "factor": 0.19 },
        { "vehicle_type": "MOTORCYCLE", "factor": 0.09 }
    ]
}"#;

#[test]
fn test_load_factor_table_reads_json() {
    let path: PathBuf = write_seed_file(SEED_JSON);

    let table: EmissionFactorTable = load_factor_table(&path).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.energy[0].region, Region::new("AL"));
    assert_eq!(table.transportation[1].vehicle_type, VehicleType::Motorcycle);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_load_factor_table_missing_file() {
    let path: PathBuf = std::env::temp_dir().join("carbon-calc-seed-does-not-exist.json");

    let result: Result<EmissionFactorTable, FactorSeedError> = load_factor_table(&path);

    assert!(matches!(result, Err(FactorSeedError::Read { .. })));
}

#[test]
fn test_load_factor_table_invalid_json() {
    let path: PathBuf = write_seed_file(r#"{ "energy": [{ "region": "AL" }] }"#);

    let result: Result<EmissionFactorTable, FactorSeedError> = load_factor_table(&path);

    assert!(matches!(result, Err(FactorSeedError::Parse { .. })));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_seed_from_file_populates_factors() {
    let path: PathBuf = write_seed_file(SEED_JSON);
    let mut persistence: Persistence = create_test_persistence();

    let written: usize = seed_from_file(&mut persistence, &path).unwrap();

    assert_eq!(written, 4);
    assert!(
        persistence
            .get_energy_factor(&Region::new("AL"))
            .unwrap()
            .is_some()
    );
    assert_eq!(persistence.list_transportation_factors().unwrap().len(), 2);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_seeding_twice_is_an_upsert() {
    let path: PathBuf = write_seed_file(SEED_JSON);
    let mut persistence: Persistence = create_test_persistence();

    seed_from_file(&mut persistence, &path).unwrap();
    seed_from_file(&mut persistence, &path).unwrap();

    assert_eq!(persistence.list_transportation_factors().unwrap().len(), 2);
    std::fs::remove_file(path).unwrap();
}
