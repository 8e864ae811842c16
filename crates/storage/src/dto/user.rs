use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating an account. The identity provider holds the
/// credential; the profile row holds username/email/role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(
        min = 8,
        message = "Password length must be equal or greater than 8 characters."
    ))]
    pub password: String,

    #[validate(custom(function = "validate_account_role"))]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(
        min = 8,
        message = "Password length must be equal or greater than 8 characters."
    ))]
    pub password: String,

    #[validate(custom(function = "validate_account_role"))]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteUserRequest {
    pub id: Uuid,
}

pub fn validate_account_role(role: &str) -> Result<(), validator::ValidationError> {
    const VALID_ROLES: &[&str] = &["Admin", "Judge"];

    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_role"))
    }
}

/// True when the address belongs to the institutional domain. Exact match
/// on the part after '@'.
pub fn email_domain_matches(email: &str, domain: &str) -> bool {
    email.split('@').nth(1) == Some(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_check_is_exact() {
        assert!(email_domain_matches("judge@college.edu.ph", "college.edu.ph"));
        assert!(!email_domain_matches("judge@mail.college.edu.ph", "college.edu.ph"));
        assert!(!email_domain_matches("judge@college.edu", "college.edu.ph"));
        assert!(!email_domain_matches("no-at-sign", "college.edu.ph"));
    }

    #[test]
    fn password_shorter_than_8_is_rejected() {
        let req = CreateUserRequest {
            username: "judge1".to_string(),
            email: "judge1@college.edu.ph".to_string(),
            password: "short7!".to_string(),
            role: "Judge".to_string(),
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn admin_and_judge_are_the_only_roles() {
        assert!(validate_account_role("Admin").is_ok());
        assert!(validate_account_role("Judge").is_ok());
        assert!(validate_account_role("Superuser").is_err());
    }
}
