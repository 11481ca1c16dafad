//! Team Manager API
//!
//! A team profile management service:
//! - CRUD + merge-patch over team profiles
//! - Admin-or-member authorization on mutations
//! - Bearer-token caller identity passed explicitly into each handler

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::warn;

use api::state::AppState;
use infrastructure::auth::{JwtConfig, JwtValidator};
use infrastructure::team_profile::{InMemoryTeamProfileRepository, TeamProfileService};

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> AppState {
    let repository = Arc::new(InMemoryTeamProfileRepository::new());
    let team_profile_service = Arc::new(TeamProfileService::new(repository));

    let jwt_validator = Arc::new(JwtValidator::new(&jwt_config(config)));

    AppState::new(
        team_profile_service,
        jwt_validator,
        config.application.name.as_str(),
    )
}

/// Resolve the JWT secret from config, environment, or the insecure default
fn jwt_config(config: &AppConfig) -> JwtConfig {
    let secret = config
        .auth
        .jwt_secret
        .clone()
        .or_else(|| std::env::var("JWT_SECRET").ok())
        .unwrap_or_else(|| {
            warn!(
                "No JWT secret configured. Using the built-in default; \
                set APP__AUTH__JWT_SECRET or JWT_SECRET in production."
            );
            JwtConfig::default().secret
        });

    JwtConfig::new(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state() {
        let state = create_app_state(&AppConfig::default());
        assert_eq!(state.application_name.as_ref(), "teamManager");
    }

    #[test]
    fn test_jwt_config_prefers_configured_secret() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = Some("configured".to_string());

        assert_eq!(jwt_config(&config).secret, "configured");
    }
}
