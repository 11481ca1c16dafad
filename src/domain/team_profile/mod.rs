//! Team profile domain - entity, transfer shape, repository trait

mod entity;
mod repository;
mod representation;
mod validation;

pub use entity::{NewTeamProfile, ProfileId, TeamMember, TeamProfile};
pub use repository::TeamProfileRepository;
pub use representation::{TeamMemberRepresentation, TeamProfileRepresentation};
pub use validation::{
    validate_member_login, validate_profile_motto, validate_profile_name, ProfileValidationError,
};
