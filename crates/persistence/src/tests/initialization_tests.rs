// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_persistence, create_test_session};
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_migrations_create_expected_tables() {
    let mut persistence: Persistence = create_test_persistence();

    let tables: Vec<String> = persistence.list_tables().unwrap();

    assert_eq!(
        tables,
        vec![
            "calculation_sessions",
            "energy_emission_factors",
            "solid_waste_emission_factors",
            "transportation_emission_factors",
            "transportation_entries",
        ]
    );
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = create_test_persistence();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = create_test_persistence();
    let mut db2: Persistence = create_test_persistence();

    db1.save_session(&create_test_session()).unwrap();

    assert_eq!(db1.count_sessions().unwrap(), 1);
    assert_eq!(db2.count_sessions().unwrap(), 0);
}

#[test]
fn test_file_database_persists_across_reopen() {
    let path = std::env::temp_dir().join(format!(
        "carbon-calc-reopen-{}.sqlite3",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let session = create_test_session();

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence.save_session(&session).unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.find_session(session.id()).unwrap(), Some(session));

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("sqlite3-wal"));
    let _ = std::fs::remove_file(path.with_extension("sqlite3-shm"));
}
