// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use carbon_calc_api::{
    ApiError, CalculationResultResponse, StartCalculationRequest, StartCalculationResponse,
    TransportationItem, UpdateCalculationRequest, UpdateCalculationResponse, calculation_result,
    start_calc, update_info,
};
use carbon_calc_persistence::{Persistence, seed_from_file};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Message returned when a request body cannot be read as JSON.
const UNREADABLE_BODY_MESSAGE: &str = "The content of the request could not be processed. \
Please check that the data was entered correctly.";

/// Carbon Calc Server - HTTP server for the carbon footprint calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// JSON file of emission factors to load at startup
    #[arg(short, long)]
    factors: Option<PathBuf>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for sessions and emission factors.
    persistence: Arc<Mutex<Persistence>>,
}

/// Body of `POST /open/start-calc`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct StartCalcApiRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, alias = "uf")]
    region: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
}

/// One transportation entry in `PUT /open/info`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransportationApiItem {
    #[serde(rename = "type")]
    vehicle_type: String,
    #[serde(default)]
    monthly_distance: f64,
}

/// Body of `PUT /open/info`.
///
/// Omitted numeric fields are zero. An omitted or null `transportation`
/// leaves the stored list untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoApiRequest {
    id: String,
    #[serde(default)]
    energy_consumption: f64,
    #[serde(default)]
    transportation: Option<Vec<TransportationApiItem>>,
    #[serde(default)]
    solid_waste_total: f64,
    #[serde(default)]
    recycle_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StartCalcApiResponse {
    id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InfoApiResponse {
    success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultApiResponse {
    energy: f64,
    transportation: f64,
    solid_waste: f64,
    total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidRequest { .. } | ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Persistence(ref persistence_err) => {
                error!(error = %persistence_err, "Persistence error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected unreadable request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: String::from(UNREADABLE_BODY_MESSAGE),
        }
    }
}

impl From<StartCalcApiRequest> for StartCalculationRequest {
    fn from(req: StartCalcApiRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            region: req.region,
            phone_number: req.phone_number,
        }
    }
}

impl From<InfoApiRequest> for UpdateCalculationRequest {
    fn from(req: InfoApiRequest) -> Self {
        Self {
            id: req.id,
            energy_consumption: req.energy_consumption,
            transportation: req.transportation.map(|items| {
                items
                    .into_iter()
                    .map(|item| TransportationItem {
                        vehicle_type: item.vehicle_type,
                        monthly_distance: item.monthly_distance,
                    })
                    .collect()
            }),
            solid_waste_total: req.solid_waste_total,
            recycle_percentage: req.recycle_percentage,
        }
    }
}

impl From<CalculationResultResponse> for ResultApiResponse {
    fn from(result: CalculationResultResponse) -> Self {
        Self {
            energy: result.energy,
            transportation: result.transportation,
            solid_waste: result.solid_waste,
            total: result.total,
        }
    }
}

/// Handler for POST `/open/start-calc` endpoint.
///
/// Starts a new calculation session. A JSON `null` body is treated as an
/// absent request.
async fn handle_start_calc(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<Option<StartCalcApiRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<StartCalcApiResponse>), HttpError> {
    let Json(req) = payload?;
    info!("Handling start_calc request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StartCalculationResponse =
        start_calc(&mut persistence, req.map(StartCalculationRequest::from))?;
    drop(persistence);

    info!(id = %response.id, "Started calculation");
    Ok((
        StatusCode::CREATED,
        Json(StartCalcApiResponse { id: response.id }),
    ))
}

/// Handler for PUT `/open/info` endpoint.
///
/// Replaces the activity values of a calculation session.
async fn handle_update_info(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<Option<InfoApiRequest>>, JsonRejection>,
) -> Result<Json<InfoApiResponse>, HttpError> {
    let Json(req) = payload?;
    info!("Handling update_info request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateCalculationResponse =
        update_info(&mut persistence, req.map(UpdateCalculationRequest::from))?;
    drop(persistence);

    Ok(Json(InfoApiResponse {
        success: response.success,
    }))
}

/// Handler for GET `/open/result/{id}` endpoint.
async fn handle_get_result(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResultApiResponse>, HttpError> {
    info!(id = %id, "Handling get_result request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CalculationResultResponse = calculation_result(&mut persistence, &id)?;
    drop(persistence);

    Ok(Json(ResultApiResponse::from(response)))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/open/start-calc", post(handle_start_calc))
        .route("/open/info", put(handle_update_info))
        .route("/open/result/{id}", get(handle_get_result))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Carbon Calc Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let Some(factors_path) = &args.factors {
        let written: usize = seed_from_file(&mut persistence, factors_path)?;
        info!("Seeded {} emission factors", written);
    } else {
        warn!("No emission factor file given; results will be zero until factors are stored");
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
