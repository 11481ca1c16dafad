//! Team profile validation

use thiserror::Error;

/// Errors that can occur during team profile validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileValidationError {
    #[error("Team profile name cannot be empty")]
    EmptyName,

    #[error("Team profile name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Team profile motto cannot exceed {0} characters")]
    MottoTooLong(usize),

    #[error("Member login cannot be empty")]
    EmptyLogin,

    #[error("Member login cannot exceed {0} characters")]
    LoginTooLong(usize),

    #[error("Member login cannot contain whitespace")]
    LoginContainsWhitespace,
}

const MAX_PROFILE_NAME_LENGTH: usize = 100;
const MAX_PROFILE_MOTTO_LENGTH: usize = 255;
const MAX_MEMBER_LOGIN_LENGTH: usize = 50;

/// Validate a team profile name
pub fn validate_profile_name(name: &str) -> Result<(), ProfileValidationError> {
    if name.is_empty() {
        return Err(ProfileValidationError::EmptyName);
    }

    if name.len() > MAX_PROFILE_NAME_LENGTH {
        return Err(ProfileValidationError::NameTooLong(MAX_PROFILE_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a team profile motto
pub fn validate_profile_motto(motto: &str) -> Result<(), ProfileValidationError> {
    if motto.len() > MAX_PROFILE_MOTTO_LENGTH {
        return Err(ProfileValidationError::MottoTooLong(
            MAX_PROFILE_MOTTO_LENGTH,
        ));
    }

    Ok(())
}

/// Validate a team member login
pub fn validate_member_login(login: &str) -> Result<(), ProfileValidationError> {
    if login.is_empty() {
        return Err(ProfileValidationError::EmptyLogin);
    }

    if login.len() > MAX_MEMBER_LOGIN_LENGTH {
        return Err(ProfileValidationError::LoginTooLong(
            MAX_MEMBER_LOGIN_LENGTH,
        ));
    }

    if login.chars().any(char::is_whitespace) {
        return Err(ProfileValidationError::LoginContainsWhitespace);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile_name() {
        assert!(validate_profile_name("The A-Team").is_ok());
        assert!(validate_profile_name("x").is_ok());
    }

    #[test]
    fn test_empty_profile_name() {
        assert_eq!(
            validate_profile_name(""),
            Err(ProfileValidationError::EmptyName)
        );
    }

    #[test]
    fn test_profile_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_profile_name(&long_name),
            Err(ProfileValidationError::NameTooLong(100))
        );
    }

    #[test]
    fn test_valid_motto() {
        assert!(validate_profile_motto("").is_ok());
        assert!(validate_profile_motto("Ship it").is_ok());
    }

    #[test]
    fn test_motto_too_long() {
        let long_motto = "a".repeat(256);
        assert_eq!(
            validate_profile_motto(&long_motto),
            Err(ProfileValidationError::MottoTooLong(255))
        );
    }

    #[test]
    fn test_valid_member_login() {
        assert!(validate_member_login("jdoe").is_ok());
        assert!(validate_member_login("j.doe-42").is_ok());
    }

    #[test]
    fn test_empty_member_login() {
        assert_eq!(
            validate_member_login(""),
            Err(ProfileValidationError::EmptyLogin)
        );
    }

    #[test]
    fn test_member_login_too_long() {
        let long_login = "a".repeat(51);
        assert_eq!(
            validate_member_login(&long_login),
            Err(ProfileValidationError::LoginTooLong(50))
        );
    }

    #[test]
    fn test_member_login_with_whitespace() {
        assert_eq!(
            validate_member_login("j doe"),
            Err(ProfileValidationError::LoginContainsWhitespace)
        );
    }
}
