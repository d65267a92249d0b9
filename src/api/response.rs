//! Response types for the calculator API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from [`CalculatorError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CalculatorError;
use crate::form::FormMessage;
use crate::models::JobCharge;

/// Response body for `/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the result.
    pub engine_version: String,
    /// The total, ready for display.
    pub formatted_total: String,
    /// The full charge breakdown.
    pub charge: JobCharge,
}

impl CalculationResponse {
    /// Wraps a charge with a fresh id and timestamp.
    pub fn new(calculation_id: Uuid, charge: JobCharge) -> Self {
        Self {
            calculation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            formatted_total: charge.formatted_total.clone(),
            charge,
        }
    }
}

/// Response body for `/validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the calculate action should be enabled.
    pub can_calculate: bool,
    /// A message to show the user, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<FormMessage>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CalculatorError> for ApiErrorResponse {
    fn from(error: CalculatorError) -> Self {
        let message = error.to_string();
        match error {
            CalculatorError::ConfigNotFound { .. }
            | CalculatorError::ConfigParseError { .. }
            | CalculatorError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            CalculatorError::InvalidTime { input, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    message,
                    format!("'{}' is not a whole-hour time such as 17:00 or 05:00 PM", input),
                ),
            },
            CalculatorError::TimeOutOfRange { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TIME_OUT_OF_RANGE",
                    message,
                    format!("See GET /options for the allowed {} times", field),
                ),
            },
            CalculatorError::OrderingViolation {
                message: form_message,
                ..
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("ORDERING_VIOLATION", message, form_message),
            },
            CalculatorError::NegativeDuration { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn time(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_time_maps_to_bad_request() {
        let api_error: ApiErrorResponse = CalculatorError::InvalidTime {
            input: "noon".to_string(),
            message: "expected HH:MM".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_TIME");
        assert!(api_error.error.details.unwrap().contains("noon"));
    }

    #[test]
    fn test_ordering_violation_maps_to_bad_request() {
        let api_error: ApiErrorResponse = CalculatorError::OrderingViolation {
            start: time(18),
            end: time(17),
            message: crate::form::END_AFTER_START_MESSAGE.to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "ORDERING_VIOLATION");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some(crate::form::END_AFTER_START_MESSAGE)
        );
    }

    #[test]
    fn test_negative_duration_maps_to_server_error() {
        let api_error: ApiErrorResponse = CalculatorError::NegativeDuration {
            tier: "midnight_to_end".to_string(),
            hours: -1,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CALCULATION_ERROR");
    }

    #[test]
    fn test_validation_response_omits_empty_message() {
        let body = ValidationResponse {
            can_calculate: true,
            message: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"can_calculate":true}"#);
    }
}
