//! Team profile repository trait

use async_trait::async_trait;

use super::entity::{NewTeamProfile, ProfileId, TeamProfile};
use crate::domain::DomainError;

/// Repository for persisting team profiles
///
/// The backing store owns id assignment: `save` takes an unsaved profile and
/// returns it with a fresh id attached.
#[async_trait]
pub trait TeamProfileRepository: Send + Sync + std::fmt::Debug {
    /// Get a team profile by id
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<TeamProfile>, DomainError>;

    /// List all team profiles in store order
    async fn find_all(&self) -> Result<Vec<TeamProfile>, DomainError>;

    /// Persist a new team profile, assigning its id
    async fn save(&self, profile: NewTeamProfile) -> Result<TeamProfile, DomainError>;

    /// Replace an existing team profile
    async fn update(&self, profile: TeamProfile) -> Result<TeamProfile, DomainError>;

    /// Delete a team profile by id, returns true if one was removed
    async fn delete(&self, id: ProfileId) -> Result<bool, DomainError>;

    /// Check if a team profile exists
    async fn exists(&self, id: ProfileId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
