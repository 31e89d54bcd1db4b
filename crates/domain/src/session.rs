// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CalculationId, TransportationEntry, UserIdentity};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a calculation session.
///
/// Sessions are never deleted; both states may be queried any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SessionLifecycle {
    /// Identity set, activity fields at their defaults.
    #[default]
    Created,
    /// At least one activity update has been applied.
    Updated,
}

impl SessionLifecycle {
    /// Converts this lifecycle state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Updated => "Updated",
        }
    }
}

impl FromStr for SessionLifecycle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(Self::Created),
            "Updated" => Ok(Self::Updated),
            _ => Err(DomainError::InvalidLifecycleState(s.to_string())),
        }
    }
}

impl std::fmt::Display for SessionLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// New activity values for a calculation session.
///
/// The numeric fields always overwrite the stored values. `transportation`
/// replaces the stored list only when it is `Some`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityUpdate {
    /// Household energy consumption in kWh.
    pub energy_consumption: f64,
    /// Replacement transportation entries, `None` to keep the current list.
    pub transportation: Option<Vec<TransportationEntry>>,
    /// Solid waste produced, in kg.
    pub solid_waste_total: f64,
    /// Fraction of the solid waste that is recycled, expected in `[0, 1]`.
    pub recycle_percentage: f64,
}

/// The mutable record tracking one user's carbon calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationSession {
    id: CalculationId,
    identity: UserIdentity,
    energy_consumption: f64,
    transportation: Option<Vec<TransportationEntry>>,
    solid_waste_total: f64,
    recycle_percentage: f64,
    lifecycle: SessionLifecycle,
}

impl CalculationSession {
    /// Creates a new session with a freshly generated identifier and all
    /// activity fields at their defaults.
    #[must_use]
    pub fn new(identity: UserIdentity) -> Self {
        Self {
            id: CalculationId::generate(),
            identity,
            energy_consumption: 0.0,
            transportation: None,
            solid_waste_total: 0.0,
            recycle_percentage: 0.0,
            lifecycle: SessionLifecycle::Created,
        }
    }

    /// Rebuilds a session from previously stored values.
    ///
    /// The transportation list is kept exactly as given, including `None`.
    #[must_use]
    pub fn restore(
        id: CalculationId,
        identity: UserIdentity,
        lifecycle: SessionLifecycle,
        activity: ActivityUpdate,
    ) -> Self {
        Self {
            id,
            identity,
            energy_consumption: activity.energy_consumption,
            transportation: activity.transportation,
            solid_waste_total: activity.solid_waste_total,
            recycle_percentage: activity.recycle_percentage,
            lifecycle,
        }
    }

    /// Applies an activity update.
    ///
    /// Energy consumption, solid waste total and recycle percentage are
    /// overwritten unconditionally. The transportation list is replaced only
    /// when the update carries one.
    pub fn apply_update(&mut self, update: ActivityUpdate) {
        self.energy_consumption = update.energy_consumption;
        if let Some(entries) = update.transportation {
            self.transportation = Some(entries);
        }
        self.solid_waste_total = update.solid_waste_total;
        self.recycle_percentage = update.recycle_percentage;
        self.lifecycle = SessionLifecycle::Updated;
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> &CalculationId {
        &self.id
    }

    /// Returns the validated user identity.
    #[must_use]
    pub const fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// Returns the energy consumption in kWh.
    #[must_use]
    pub const fn energy_consumption(&self) -> f64 {
        self.energy_consumption
    }

    /// Returns the stored transportation entries, `None` if never supplied.
    #[must_use]
    pub fn transportation(&self) -> Option<&[TransportationEntry]> {
        self.transportation.as_deref()
    }

    /// Returns the transportation entries, treating an absent list as empty.
    #[must_use]
    pub fn transportation_or_empty(&self) -> &[TransportationEntry] {
        self.transportation.as_deref().unwrap_or_default()
    }

    /// Returns the solid waste total in kg.
    #[must_use]
    pub const fn solid_waste_total(&self) -> f64 {
        self.solid_waste_total
    }

    /// Returns the recycled fraction of solid waste.
    #[must_use]
    pub const fn recycle_percentage(&self) -> f64 {
        self.recycle_percentage
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn lifecycle(&self) -> SessionLifecycle {
        self.lifecycle
    }
}
