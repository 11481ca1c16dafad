//! Caller identity types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Role granted to a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrative role, may manage any team profile
    Admin,
    /// Regular authenticated user
    User,
}

impl Role {
    /// Parse a role from its wire authority name
    pub fn from_authority(authority: &str) -> Option<Self> {
        match authority {
            "ROLE_ADMIN" => Some(Self::Admin),
            "ROLE_USER" => Some(Self::User),
            _ => None,
        }
    }

    /// The wire authority name for this role
    pub fn as_authority(&self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::User => "ROLE_USER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_authority())
    }
}

/// An authenticated caller with a login identity and role grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedCaller {
    login: String,
    roles: HashSet<Role>,
}

impl AuthenticatedCaller {
    pub fn new(login: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            login: login.into(),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

/// The caller of an operation, passed explicitly into each handler
///
/// Anonymous callers are admitted; operations that require a role or a
/// membership fail their authorization check instead of rejecting the
/// request upfront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Authenticated(AuthenticatedCaller),
}

impl Caller {
    /// Convenience constructor for an authenticated caller
    pub fn authenticated(login: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self::Authenticated(AuthenticatedCaller::new(login, roles))
    }

    pub fn login(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(caller) => Some(caller.login()),
        }
    }

    pub fn is_admin(&self) -> bool {
        match self {
            Self::Anonymous => false,
            Self::Authenticated(caller) => caller.is_admin(),
        }
    }
}
