// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the carbon calculator.
//!
//! Transport-agnostic request and response types, the handlers that run the
//! engine against persistence, and translation of every lower-level error
//! into `ApiError`.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_engine_error};
pub use handlers::{calculation_result, start_calc, update_info};
pub use request_response::{
    CalculationResultResponse, StartCalculationRequest, StartCalculationResponse,
    TransportationItem, UpdateCalculationRequest, UpdateCalculationResponse,
};
