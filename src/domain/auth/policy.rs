//! Authorization policy for team profile mutations

use super::caller::Caller;
use crate::domain::team_profile::TeamProfile;

/// Decide whether a caller may modify a team profile.
///
/// Admins may modify anything, including creating profiles (no target yet).
/// Non-admins may modify a profile only when their login appears among the
/// stored entity's team members; membership is never derived from an
/// incoming representation.
pub fn may_modify_profile(caller: &Caller, target: Option<&TeamProfile>) -> bool {
    if caller.is_admin() {
        return true;
    }

    match (caller.login(), target) {
        (Some(login), Some(profile)) => profile.has_member(login),
        _ => false,
    }
}
