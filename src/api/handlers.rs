//! HTTP request handlers for the aguinaldo API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::perform_calculation;
use crate::error::EngineError;
use crate::models::RawBonusInput;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, ValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/validate", post(validate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Validates the raw input and, if every field passes, returns the bonus
/// with its audit trace. Field errors come back as 422.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let raw: RawBonusInput = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let scenario = raw.scenario();

    let input = match state.validator().validate(&raw) {
        Ok(input) => input,
        Err(errors) => {
            warn!(
                correlation_id = %correlation_id,
                scenario = scenario.as_str(),
                errors = %errors,
                "Input rejected"
            );
            return ApiErrorResponse::from(EngineError::from(errors)).into_response();
        }
    };

    let result = perform_calculation(&input, state.config().policy(), state.formatter());
    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        scenario = scenario.as_str(),
        bonus_amount = %result.bonus_amount,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /validate endpoint.
///
/// Runs the same validation as `/calculate` without computing anything.
/// Always 200 for a well-formed body; the verdict is in the payload.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let raw: RawBonusInput = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let response = ValidationResponse::from(state.validator().validate(&raw).map(|_| ()));
    info!(
        correlation_id = %correlation_id,
        scenario = raw.scenario().as_str(),
        valid = response.valid,
        "Validation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Turns a body that could not be read as a request into a 400.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::new("INVALID_REQUEST", body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
