//! JWT token validation

use std::collections::HashSet;
use std::fmt::Debug;

use chrono::Utc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::auth::{AuthenticatedCaller, Role};
use crate::domain::DomainError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (login)
    pub sub: String,
    /// Comma-separated role authorities
    pub auth: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Roles parsed from the authorities claim; unknown authorities are ignored
    pub fn roles(&self) -> HashSet<Role> {
        self.auth
            .split(',')
            .filter_map(|authority| Role::from_authority(authority.trim()))
            .collect()
    }
}

/// Configuration for JWT validation
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for verifying token signatures
    pub secret: String,
}

impl JwtConfig {
    /// Create new JWT configuration
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
        }
    }
}

/// Validates bearer tokens and resolves them to caller identities
#[derive(Clone)]
pub struct JwtValidator {
    decoding_key: DecodingKey,
}

impl Debug for JwtValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtValidator")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtValidator {
    /// Create a new validator with the given configuration
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Validate a token and return its claims
    pub fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let validation = Validation::default();

        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::validation(format!("Invalid JWT: {}", e)))?;

        Ok(token_data.claims)
    }

    /// Validate a token and resolve the authenticated caller it names
    pub fn resolve_caller(&self, token: &str) -> Result<AuthenticatedCaller, DomainError> {
        let claims = self.validate(token)?;
        Ok(AuthenticatedCaller::new(claims.sub.clone(), claims.roles()))
    }
}

/// Issue a signed token for tests
#[cfg(test)]
pub fn issue_token(login: &str, roles: &[Role], secret: &str) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let now = Utc::now();
    let authorities: Vec<&str> = roles.iter().map(Role::as_authority).collect();

    let claims = JwtClaims {
        sub: login.to_string(),
        auth: authorities.join(","),
        iat: now.timestamp(),
        exp: (now + chrono::Duration::hours(1)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token encoding cannot fail with a symmetric key")
}
