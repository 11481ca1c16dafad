//! Application state for shared services

use std::sync::Arc;

use crate::domain::team_profile::{
    ProfileId, TeamProfile, TeamProfileRepository, TeamProfileRepresentation,
};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtValidator;
use crate::infrastructure::team_profile::TeamProfileService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub team_profile_service: Arc<dyn TeamProfileServiceTrait>,
    pub jwt_validator: Arc<JwtValidator>,
    pub application_name: Arc<str>,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        team_profile_service: Arc<dyn TeamProfileServiceTrait>,
        jwt_validator: Arc<JwtValidator>,
        application_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            team_profile_service,
            jwt_validator,
            application_name: application_name.into(),
        }
    }
}

/// Trait for team profile service operations
#[async_trait::async_trait]
pub trait TeamProfileServiceTrait: Send + Sync {
    async fn save(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<TeamProfile, DomainError>;
    async fn update(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<TeamProfile, DomainError>;
    async fn partial_update(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<Option<TeamProfile>, DomainError>;
    async fn find_all(&self) -> Result<Vec<TeamProfile>, DomainError>;
    async fn find_one(&self, id: ProfileId) -> Result<Option<TeamProfile>, DomainError>;
    async fn delete(&self, id: ProfileId) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: TeamProfileRepository + 'static> TeamProfileServiceTrait for TeamProfileService<R> {
    async fn save(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<TeamProfile, DomainError> {
        TeamProfileService::save(self, representation).await
    }

    async fn update(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<TeamProfile, DomainError> {
        TeamProfileService::update(self, representation).await
    }

    async fn partial_update(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<Option<TeamProfile>, DomainError> {
        TeamProfileService::partial_update(self, representation).await
    }

    async fn find_all(&self) -> Result<Vec<TeamProfile>, DomainError> {
        TeamProfileService::find_all(self).await
    }

    async fn find_one(&self, id: ProfileId) -> Result<Option<TeamProfile>, DomainError> {
        TeamProfileService::find_one(self, id).await
    }

    async fn delete(&self, id: ProfileId) -> Result<(), DomainError> {
        TeamProfileService::delete(self, id).await
    }
}
