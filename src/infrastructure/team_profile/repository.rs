//! In-memory team profile repository implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::team_profile::{NewTeamProfile, ProfileId, TeamProfile, TeamProfileRepository};
use crate::domain::DomainError;

/// Thread-safe in-memory implementation of `TeamProfileRepository`
///
/// Ids come from a monotonic sequence starting at 1. Data is lost when the
/// process terminates.
#[derive(Debug, Default)]
pub struct InMemoryTeamProfileRepository {
    profiles: RwLock<HashMap<i64, TeamProfile>>,
    sequence: AtomicI64,
}

impl InMemoryTeamProfileRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> ProfileId {
        ProfileId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl TeamProfileRepository for InMemoryTeamProfileRepository {
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<TeamProfile>, DomainError> {
        let profiles = self.profiles.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(profiles.get(&id.value()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<TeamProfile>, DomainError> {
        let profiles = self.profiles.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut result: Vec<TeamProfile> = profiles.values().cloned().collect();
        result.sort_by_key(|p| p.id());
        Ok(result)
    }

    async fn save(&self, profile: NewTeamProfile) -> Result<TeamProfile, DomainError> {
        let mut profiles = self.profiles.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let saved = profile.into_profile(self.next_id());
        profiles.insert(saved.id().value(), saved.clone());
        Ok(saved)
    }

    async fn update(&self, profile: TeamProfile) -> Result<TeamProfile, DomainError> {
        let mut profiles = self.profiles.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if !profiles.contains_key(&profile.id().value()) {
            return Err(DomainError::not_found(format!(
                "Team profile {} not found",
                profile.id()
            )));
        }

        profiles.insert(profile.id().value(), profile.clone());
        Ok(profile)
    }

    async fn delete(&self, id: ProfileId) -> Result<bool, DomainError> {
        let mut profiles = self.profiles.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(profiles.remove(&id.value()).is_some())
    }
}
