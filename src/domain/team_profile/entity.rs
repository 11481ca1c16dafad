//! Team profile entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{
    validate_member_login, validate_profile_motto, validate_profile_name, ProfileValidationError,
};

/// Team profile identifier, assigned by the store on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(i64);

impl ProfileId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProfileId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member of a team, identified by login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

impl TeamMember {
    /// Create a new team member after validating the login
    pub fn new(login: impl Into<String>) -> Result<Self, ProfileValidationError> {
        let login = login.into();
        validate_member_login(&login)?;

        Ok(Self {
            login,
            display_name: None,
        })
    }

    /// Set display name (builder pattern)
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// Team profile aggregate
///
/// Membership checks are decided solely by the logins carried in
/// `team_members`; every other descriptive attribute is opaque to
/// authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    /// Store-assigned identifier, immutable once set
    id: ProfileId,
    /// Display name
    name: String,
    /// Optional team motto
    #[serde(skip_serializing_if = "Option::is_none")]
    motto: Option<String>,
    /// Members of the team
    team_members: Vec<TeamMember>,
}

impl TeamProfile {
    /// Create a new team profile
    pub fn new(id: ProfileId, name: impl Into<String>) -> Result<Self, ProfileValidationError> {
        let name = name.into();
        validate_profile_name(&name)?;

        Ok(Self {
            id,
            name,
            motto: None,
            team_members: Vec::new(),
        })
    }

    /// Set motto (builder pattern)
    pub fn with_motto(mut self, motto: impl Into<String>) -> Result<Self, ProfileValidationError> {
        let motto = motto.into();
        validate_profile_motto(&motto)?;
        self.motto = Some(motto);
        Ok(self)
    }

    /// Set team members (builder pattern)
    pub fn with_members(mut self, members: Vec<TeamMember>) -> Self {
        self.team_members = members;
        self
    }

    // Getters

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn motto(&self) -> Option<&str> {
        self.motto.as_deref()
    }

    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    /// Check whether a login belongs to one of the team members
    pub fn has_member(&self, login: &str) -> bool {
        self.team_members.iter().any(|m| m.login() == login)
    }

    // Mutators

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ProfileValidationError> {
        let name = name.into();
        validate_profile_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Update the motto
    pub fn set_motto(&mut self, motto: Option<String>) -> Result<(), ProfileValidationError> {
        if let Some(ref motto) = motto {
            validate_profile_motto(motto)?;
        }
        self.motto = motto;
        Ok(())
    }

    /// Replace the member set
    pub fn set_team_members(&mut self, members: Vec<TeamMember>) {
        self.team_members = members;
    }
}

/// A team profile that has not been persisted yet and therefore has no id
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeamProfile {
    name: String,
    motto: Option<String>,
    team_members: Vec<TeamMember>,
}

impl NewTeamProfile {
    /// Create a new unsaved team profile
    pub fn new(name: impl Into<String>) -> Result<Self, ProfileValidationError> {
        let name = name.into();
        validate_profile_name(&name)?;

        Ok(Self {
            name,
            motto: None,
            team_members: Vec::new(),
        })
    }

    /// Set motto (builder pattern)
    pub fn with_motto(mut self, motto: impl Into<String>) -> Result<Self, ProfileValidationError> {
        let motto = motto.into();
        validate_profile_motto(&motto)?;
        self.motto = Some(motto);
        Ok(self)
    }

    /// Set team members (builder pattern)
    pub fn with_members(mut self, members: Vec<TeamMember>) -> Self {
        self.team_members = members;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach the store-assigned id, turning this into a persisted profile
    pub fn into_profile(self, id: ProfileId) -> TeamProfile {
        TeamProfile {
            id,
            name: self.name,
            motto: self.motto,
            team_members: self.team_members,
        }
    }
}
