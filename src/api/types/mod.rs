//! API boundary types - errors, JSON extraction, alert headers

pub mod alerts;
pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
