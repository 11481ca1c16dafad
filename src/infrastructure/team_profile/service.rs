//! Team profile service bridging representations and the repository

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team_profile::{
    NewTeamProfile, ProfileId, TeamMember, TeamMemberRepresentation, TeamProfile,
    TeamProfileRepository, TeamProfileRepresentation,
};
use crate::domain::DomainError;

/// Service for managing team profiles
#[derive(Debug)]
pub struct TeamProfileService<R: TeamProfileRepository> {
    repository: Arc<R>,
}

impl<R: TeamProfileRepository> TeamProfileService<R> {
    /// Create a new team profile service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persist a new team profile; the store assigns the id
    pub async fn save(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<TeamProfile, DomainError> {
        info!(name = ?representation.name, "Saving team profile");

        let name = representation
            .name
            .ok_or_else(|| DomainError::validation("Team profile name is required"))?;

        let mut profile =
            NewTeamProfile::new(name).map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(motto) = representation.motto {
            profile = profile
                .with_motto(motto)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(members) = representation.team_members {
            profile = profile.with_members(members_from(members)?);
        }

        self.repository.save(profile).await
    }

    /// Replace an existing team profile with the submitted representation
    pub async fn update(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<TeamProfile, DomainError> {
        let id = required_id(&representation)?;
        info!(id = %id, "Updating team profile");

        let name = representation
            .name
            .ok_or_else(|| DomainError::validation("Team profile name is required"))?;

        let mut profile =
            TeamProfile::new(id, name).map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(motto) = representation.motto {
            profile = profile
                .with_motto(motto)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(members) = representation.team_members {
            profile = profile.with_members(members_from(members)?);
        }

        self.repository.update(profile).await
    }

    /// Merge the fields present in the representation into the stored profile
    ///
    /// Returns `None` when no profile with the submitted id exists.
    pub async fn partial_update(
        &self,
        representation: TeamProfileRepresentation,
    ) -> Result<Option<TeamProfile>, DomainError> {
        let id = required_id(&representation)?;
        info!(id = %id, "Partially updating team profile");

        let Some(mut profile) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(name) = representation.name {
            profile
                .set_name(name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(motto) = representation.motto {
            profile
                .set_motto(Some(motto))
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(members) = representation.team_members {
            profile.set_team_members(members_from(members)?);
        }

        self.repository.update(profile).await.map(Some)
    }

    /// List all team profiles in store order
    pub async fn find_all(&self) -> Result<Vec<TeamProfile>, DomainError> {
        debug!("Listing team profiles");
        self.repository.find_all().await
    }

    /// Get a team profile by id
    pub async fn find_one(&self, id: ProfileId) -> Result<Option<TeamProfile>, DomainError> {
        self.repository.find_by_id(id).await
    }

    /// Delete a team profile; deleting an absent id is not an error
    pub async fn delete(&self, id: ProfileId) -> Result<(), DomainError> {
        info!(id = %id, "Deleting team profile");
        self.repository.delete(id).await?;
        Ok(())
    }
}

fn required_id(representation: &TeamProfileRepresentation) -> Result<ProfileId, DomainError> {
    representation
        .id
        .map(ProfileId::new)
        .ok_or_else(|| DomainError::validation("Team profile id is required"))
}

fn members_from(
    representations: Vec<TeamMemberRepresentation>,
) -> Result<Vec<TeamMember>, DomainError> {
    representations
        .into_iter()
        .map(|rep| {
            let member =
                TeamMember::new(rep.login).map_err(|e| DomainError::validation(e.to_string()))?;

            Ok(match rep.display_name {
                Some(display_name) => member.with_display_name(display_name),
                None => member,
            })
        })
        .collect()
}
