// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calculate::calculate;
use crate::error::EngineError;
use crate::ports::{
    EnergyFactorLookup, SessionStore, SolidWasteFactorLookup, TransportationFactorLookup,
};
use carbon_calc_domain::{
    ActivityUpdate, CalculationId, CalculationResult, CalculationSession, IdentityFields,
    UserIdentity,
};
use tracing::{debug, info};

/// A request to replace the activity values of an existing session.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationUpdate {
    /// The session to update.
    pub id: CalculationId,
    /// The new activity values.
    pub activity: ActivityUpdate,
}

impl CalculationUpdate {
    /// Creates a new update request.
    #[must_use]
    pub const fn new(id: CalculationId, activity: ActivityUpdate) -> Self {
        Self { id, activity }
    }
}

/// Starts a new calculation session.
///
/// # Arguments
///
/// * `store` - The session store the new session is written to
/// * `request` - The raw identity fields, `None` if the caller sent nothing
///
/// # Returns
///
/// * `Ok(CalculationId)` with the identifier of the stored session
///
/// # Errors
///
/// Returns an error if:
/// - The request is absent
/// - Any identity field is missing or blank (the first failing field is reported)
/// - The store fails to save the session
///
/// The store is never written to unless validation succeeds.
pub fn start_calculation<S: SessionStore>(
    store: &mut S,
    request: Option<&IdentityFields>,
) -> Result<CalculationId, EngineError<S::Error>> {
    let fields: &IdentityFields =
        request.ok_or(EngineError::InvalidRequest("Identity data is required"))?;
    let identity: UserIdentity = UserIdentity::from_fields(fields)?;

    let session: CalculationSession = CalculationSession::new(identity);
    store.save(&session).map_err(EngineError::Store)?;

    info!(
        id = %session.id(),
        region = %session.identity().region(),
        "Started calculation session"
    );
    Ok(session.id().clone())
}

/// Applies new activity values to an existing session.
///
/// # Returns
///
/// * `Ok(true)` if the session existed and was saved
/// * `Ok(false)` if no session has the requested identifier
///
/// # Errors
///
/// Returns an error if the request is absent or the store fails.
pub fn update_calculation_info<S: SessionStore>(
    store: &mut S,
    request: Option<CalculationUpdate>,
) -> Result<bool, EngineError<S::Error>> {
    let update: CalculationUpdate =
        request.ok_or(EngineError::InvalidRequest("Update data is required"))?;

    let Some(mut session) = store.find_by_id(&update.id).map_err(EngineError::Store)? else {
        debug!(id = %update.id, "Update for unknown calculation session ignored");
        return Ok(false);
    };

    session.apply_update(update.activity);
    store.save(&session).map_err(EngineError::Store)?;

    info!(id = %session.id(), "Updated calculation session");
    Ok(true)
}

/// Computes the carbon footprint of a session.
///
/// An unknown identifier yields an all-zero result. Reading a result never
/// modifies the session.
///
/// # Errors
///
/// Returns an error if the session store or any factor lookup fails.
pub fn get_result<B, E>(
    backend: &mut B,
    id: &CalculationId,
) -> Result<CalculationResult, EngineError<E>>
where
    B: SessionStore<Error = E>
        + EnergyFactorLookup<Error = E>
        + TransportationFactorLookup<Error = E>
        + SolidWasteFactorLookup<Error = E>,
{
    let Some(session) = backend.find_by_id(id).map_err(EngineError::Store)? else {
        debug!(id = %id, "Result requested for unknown calculation session");
        return Ok(CalculationResult::zero());
    };

    let result: CalculationResult = calculate(backend, &session).map_err(EngineError::Store)?;
    debug!(
        id = %id,
        energy = result.energy,
        transportation = result.transportation,
        solid_waste = result.solid_waste,
        total = result.total,
        "Calculated result"
    );
    Ok(result)
}
