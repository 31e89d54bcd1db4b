// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EnergyFactorLookup, SessionStore, SolidWasteFactorLookup, TransportationFactorLookup};
use carbon_calc_domain::{
    ActivityUpdate, CalculationId, CalculationSession, EnergyEmissionFactor, IdentityFields,
    Region, SolidWasteEmissionFactor, TransportationEmissionFactor, TransportationEntry,
    VehicleType,
};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeStoreError(pub String);

impl std::fmt::Display for FakeStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fake store error: {}", self.0)
    }
}

impl std::error::Error for FakeStoreError {}

/// In-memory backend that records saves and can be told to fail.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub sessions: HashMap<CalculationId, CalculationSession>,
    pub energy: HashMap<Region, EnergyEmissionFactor>,
    pub solid_waste: HashMap<Region, SolidWasteEmissionFactor>,
    pub transportation: Vec<TransportationEmissionFactor>,
    pub save_calls: usize,
    pub transportation_lookups: usize,
    pub fail_saves: Option<FakeStoreError>,
    pub fail_lookups: Option<FakeStoreError>,
}

impl FakeBackend {
    pub fn check_lookup(&self) -> Result<(), FakeStoreError> {
        self.fail_lookups.clone().map_or(Ok(()), Err)
    }
}

impl SessionStore for FakeBackend {
    type Error = FakeStoreError;

    fn save(&mut self, session: &CalculationSession) -> Result<(), FakeStoreError> {
        self.save_calls += 1;
        if let Some(err) = self.fail_saves.clone() {
            return Err(err);
        }
        self.sessions.insert(session.id().clone(), session.clone());
        Ok(())
    }

    fn find_by_id(
        &mut self,
        id: &CalculationId,
    ) -> Result<Option<CalculationSession>, FakeStoreError> {
        self.check_lookup()?;
        Ok(self.sessions.get(id).cloned())
    }
}

impl EnergyFactorLookup for FakeBackend {
    type Error = FakeStoreError;

    fn energy_factor(
        &mut self,
        region: &Region,
    ) -> Result<Option<EnergyEmissionFactor>, FakeStoreError> {
        self.check_lookup()?;
        Ok(self.energy.get(region).cloned())
    }
}

impl TransportationFactorLookup for FakeBackend {
    type Error = FakeStoreError;

    fn transportation_factors(
        &mut self,
    ) -> Result<Vec<TransportationEmissionFactor>, FakeStoreError> {
        self.check_lookup()?;
        self.transportation_lookups += 1;
        Ok(self.transportation.clone())
    }
}

impl SolidWasteFactorLookup for FakeBackend {
    type Error = FakeStoreError;

    fn solid_waste_factor(
        &mut self,
        region: &Region,
    ) -> Result<Option<SolidWasteEmissionFactor>, FakeStoreError> {
        self.check_lookup()?;
        Ok(self.solid_waste.get(region).cloned())
    }
}

pub fn create_test_identity_fields() -> IdentityFields {
    IdentityFields::new("Ana Souza", "ana@example.com", "AL", "+55 82 99999-0000")
}

/// A backend holding the factor set used by the reference calculation.
pub fn create_seeded_backend() -> FakeBackend {
    let mut backend: FakeBackend = FakeBackend::default();
    backend.energy.insert(
        Region::new("AL"),
        EnergyEmissionFactor {
            region: Region::new("AL"),
            factor: 0.5,
        },
    );
    backend.solid_waste.insert(
        Region::new("AL"),
        SolidWasteEmissionFactor {
            region: Region::new("AL"),
            recyclable_factor: 0.43,
            non_recyclable_factor: 0.95,
        },
    );
    backend.transportation = vec![
        TransportationEmissionFactor {
            vehicle_type: VehicleType::Car,
            factor: 0.19,
        },
        TransportationEmissionFactor {
            vehicle_type: VehicleType::Motorcycle,
            factor: 0.09,
        },
    ];
    backend
}

pub fn create_reference_update() -> ActivityUpdate {
    ActivityUpdate {
        energy_consumption: 10.0,
        transportation: Some(vec![
            TransportationEntry::new(VehicleType::Car, 100.0),
            TransportationEntry::new(VehicleType::Motorcycle, 100.0),
        ]),
        solid_waste_total: 1000.0,
        recycle_percentage: 0.5,
    }
}
