//! Infrastructure layer - Concrete implementations of domain seams

pub mod auth;
pub mod logging;
pub mod team_profile;
