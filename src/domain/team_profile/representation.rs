//! Boundary transfer shape for team profiles

use serde::{Deserialize, Serialize};

use super::entity::{TeamMember, TeamProfile};

/// Transfer shape of a team member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberRepresentation {
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl From<&TeamMember> for TeamMemberRepresentation {
    fn from(member: &TeamMember) -> Self {
        Self {
            login: member.login().to_string(),
            display_name: member.display_name().map(String::from),
        }
    }
}

/// Transfer shape of a team profile, distinct from its stored form
///
/// All fields are optional so the same shape serves full updates (a missing
/// name is a validation error) and merge-patch updates (only present fields
/// overwrite stored values).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfileRepresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<TeamMemberRepresentation>>,
}

impl From<&TeamProfile> for TeamProfileRepresentation {
    fn from(profile: &TeamProfile) -> Self {
        Self {
            id: Some(profile.id().value()),
            name: Some(profile.name().to_string()),
            motto: profile.motto().map(String::from),
            team_members: Some(
                profile
                    .team_members()
                    .iter()
                    .map(TeamMemberRepresentation::from)
                    .collect(),
            ),
        }
    }
}
