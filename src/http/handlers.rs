//! Axum HTTP handlers for the web server.

use axum::{body::Bytes, Json};
use serde::Serialize;

use crate::domain::calc::{sum, CalculationRequest, CalculationResponse, ENGINE};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Decodes the body by hand rather than through the `Json` extractor so
/// the serde diagnostic reaches the caller verbatim.
pub async fn calculate(body: Bytes) -> Result<Json<CalculationResponse>, AppError> {
    let request: CalculationRequest = serde_json::from_slice(&body)
        .map_err(|err| AppError::MalformedRequest(err.to_string()))?;

    Ok(Json(CalculationResponse {
        result: sum(&request.numbers),
        engine: ENGINE,
    }))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
