// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading emission factor seed files.

use std::path::{Path, PathBuf};

use carbon_calc_domain::EmissionFactorTable;
use thiserror::Error;
use tracing::info;

use crate::Persistence;
use crate::error::PersistenceError;

/// Errors raised while loading and applying an emission factor seed file.
#[derive(Debug, Error)]
pub enum FactorSeedError {
    /// The seed file could not be read.
    #[error("Failed to read emission factor file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The seed file is not a valid factor table.
    #[error("Failed to parse emission factor file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The factors could not be written.
    #[error("Failed to store emission factors: {0}")]
    Store(#[from] PersistenceError),
}

/// Reads an `EmissionFactorTable` from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_factor_table(path: &Path) -> Result<EmissionFactorTable, FactorSeedError> {
    let contents: String = std::fs::read_to_string(path).map_err(|source| FactorSeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| FactorSeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a seed file and upserts every factor it holds.
///
/// # Returns
///
/// The number of factor records written.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the factors cannot be
/// stored.
pub fn seed_from_file(persistence: &mut Persistence, path: &Path) -> Result<usize, FactorSeedError> {
    let table: EmissionFactorTable = load_factor_table(path)?;
    info!("Loaded {} emission factors from {}", table.len(), path.display());
    Ok(persistence.seed_emission_factors(&table)?)
}
