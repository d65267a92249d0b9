//! HTTP API module for the babysitting job calculator.
//!
//! This module exposes the form over JSON: selector options, live
//! validation of a partial selection, and calculation of a complete one.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ValidationRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, ValidationResponse};
pub use state::AppState;
