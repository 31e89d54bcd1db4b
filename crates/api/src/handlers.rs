// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler translates its request into domain types, runs the matching
//! engine operation against the persistence adapter, and translates the
//! outcome back.

use carbon_calc::{CalculationUpdate, get_result, start_calculation, update_calculation_info};
use carbon_calc_domain::{
    ActivityUpdate, CalculationId, CalculationResult, IdentityFields, TransportationEntry,
    VehicleType,
};
use carbon_calc_persistence::Persistence;
use tracing::info;

use crate::error::{ApiError, translate_domain_error, translate_engine_error};
use crate::request_response::{
    CalculationResultResponse, StartCalculationRequest, StartCalculationResponse,
    TransportationItem, UpdateCalculationRequest, UpdateCalculationResponse,
};

/// Starts a new calculation for the supplied identity.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The identity fields, `None` if the caller sent no body
///
/// # Errors
///
/// Returns an error if:
/// - The request is absent
/// - A required identity field is missing or blank
/// - The session cannot be stored
pub fn start_calc(
    persistence: &mut Persistence,
    request: Option<StartCalculationRequest>,
) -> Result<StartCalculationResponse, ApiError> {
    let fields: Option<IdentityFields> = request.map(|request| IdentityFields {
        name: request.name,
        email: request.email,
        region: request.region,
        phone_number: request.phone_number,
    });

    let id: CalculationId =
        start_calculation(persistence, fields.as_ref()).map_err(translate_engine_error)?;

    Ok(StartCalculationResponse {
        id: id.value().to_string(),
    })
}

/// Replaces the activity values of a calculation.
///
/// # Returns
///
/// `success = false` if no calculation has the requested identifier. A blank
/// identifier never matches a calculation.
///
/// # Errors
///
/// Returns an error if:
/// - The request is absent
/// - A vehicle type is not recognised
/// - The session cannot be loaded or stored
pub fn update_info(
    persistence: &mut Persistence,
    request: Option<UpdateCalculationRequest>,
) -> Result<UpdateCalculationResponse, ApiError> {
    if request
        .as_ref()
        .is_some_and(|request| request.id.trim().is_empty())
    {
        info!("Update requested with a blank calculation id");
        return Ok(UpdateCalculationResponse { success: false });
    }

    let update: Option<CalculationUpdate> = request.map(to_calculation_update).transpose()?;

    let success: bool =
        update_calculation_info(persistence, update).map_err(translate_engine_error)?;

    if !success {
        info!("Update requested for a calculation that does not exist");
    }
    Ok(UpdateCalculationResponse { success })
}

/// Computes the footprint of a calculation.
///
/// An unknown or blank identifier yields an all-zero result.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn calculation_result(
    persistence: &mut Persistence,
    id: &str,
) -> Result<CalculationResultResponse, ApiError> {
    let Ok(id) = CalculationId::new(id) else {
        info!("Result requested with a blank calculation id");
        return Ok(CalculationResultResponse::default());
    };

    let result: CalculationResult =
        get_result(persistence, &id).map_err(translate_engine_error)?;

    Ok(CalculationResultResponse::from(result))
}

fn to_calculation_update(request: UpdateCalculationRequest) -> Result<CalculationUpdate, ApiError> {
    let id: CalculationId = CalculationId::new(&request.id).map_err(translate_domain_error)?;

    let transportation: Option<Vec<TransportationEntry>> = request
        .transportation
        .map(|items| {
            items
                .iter()
                .map(to_transportation_entry)
                .collect::<Result<Vec<TransportationEntry>, ApiError>>()
        })
        .transpose()?;

    Ok(CalculationUpdate::new(
        id,
        ActivityUpdate {
            energy_consumption: request.energy_consumption,
            transportation,
            solid_waste_total: request.solid_waste_total,
            recycle_percentage: request.recycle_percentage,
        },
    ))
}

fn to_transportation_entry(item: &TransportationItem) -> Result<TransportationEntry, ApiError> {
    let vehicle_type: VehicleType = item
        .vehicle_type
        .parse()
        .map_err(translate_domain_error)?;
    Ok(TransportationEntry::new(vehicle_type, item.monthly_distance))
}
