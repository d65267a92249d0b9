//! HTTP request handlers for the calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::CalculatorResult;
use crate::form::{FormField, FormOptions, JobForm, validate_selection};
use crate::models::JobTimes;

use super::request::{CalculationRequest, ValidationRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, ValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/options", get(options_handler))
        .route("/validate", post(validate_handler))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a body extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else if body_text.contains("Invalid time") {
                ApiError::new("INVALID_TIME", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

/// Handler for GET /options.
///
/// Returns the selector options for the configured shift window.
async fn options_handler(State(state): State<AppState>) -> Response {
    let options = FormOptions::for_limits(state.calculator().config().limits());
    json_response(StatusCode::OK, options)
}

/// Handler for POST /validate.
///
/// Replays the selections through a [`JobForm`] and reports whether the
/// calculate action should be enabled.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut form = JobForm::new(state.calculator().reference_hour());
    form.select_bedtime(request.bedtime);
    // The changed selector is applied last so its message wins.
    match request.changed.unwrap_or(FormField::End) {
        FormField::Start => {
            form.select_end(request.end);
            form.select_start(request.start);
        }
        FormField::Bedtime | FormField::End => {
            form.select_start(request.start);
            form.select_end(request.end);
        }
    }

    json_response(
        StatusCode::OK,
        ValidationResponse {
            can_calculate: form.can_calculate(),
            message: form.message().cloned(),
        },
    )
}

/// Handler for POST /calculate endpoint.
///
/// Accepts three job times and returns the priced job.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_calculation(&state, request, correlation_id) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                total = %response.charge.total,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates the request against the form rules and prices the job.
fn perform_calculation(
    state: &AppState,
    request: CalculationRequest,
    correlation_id: Uuid,
) -> CalculatorResult<CalculationResponse> {
    let calculator = state.calculator();
    let times = JobTimes::try_from(request)?;
    validate_selection(&times, calculator.config().limits())?;

    let mut form = JobForm::new(calculator.reference_hour());
    form.select_start(Some(times.start));
    form.select_bedtime(Some(times.bedtime));
    form.select_end(Some(times.end));

    let charge = form.calculate(calculator)?;
    Ok(CalculationResponse::new(correlation_id, charge))
}
