//! Caller identity extraction from bearer tokens
//!
//! The resolved caller is handed to each handler as an explicit argument.
//! Requests without an Authorization header resolve to an anonymous caller;
//! operations that need a role or membership then fail their authorization
//! check instead of being rejected at extraction time.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::auth::Caller;

/// Extractor resolving the current caller from the Authorization header
///
/// - no header: anonymous caller
/// - `Bearer <token>` with a valid signature: authenticated caller
/// - `Bearer <token>` that fails validation: 401
#[derive(Debug, Clone)]
pub struct CurrentCaller(pub Caller);

impl FromRequestParts<AppState> for CurrentCaller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_bearer_token(&parts.headers)? else {
            return Ok(CurrentCaller(Caller::Anonymous));
        };

        debug!("Validating bearer token");

        let caller = state
            .jwt_validator
            .resolve_caller(&token)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(CurrentCaller(Caller::Authenticated(caller)))
    }
}

/// Extract a bearer token from the Authorization header, if present
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) => Ok(Some(token.trim().to_string())),
        None => Err(ApiError::unauthorized(
            "Unsupported Authorization scheme. Provide 'Authorization: Bearer <token>'",
        )),
    }
}
