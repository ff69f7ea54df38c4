//! HTTP API module for the aguinaldo engine.
//!
//! This module provides the REST endpoints that validate raw bonus input
//! and calculate the Mexican year-end bonus.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, NewHireRequest, RawValue, TenuredRequest};
pub use response::{ApiError, ApiErrorResponse, ValidationResponse};
pub use state::AppState;
