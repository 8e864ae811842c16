use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Storage-level payload for inserting a candidate. The web layer builds
/// this from the multipart form after the image has been stored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCandidate {
    #[validate(length(min = 1, message = "Year is required"))]
    pub year: String,

    #[validate(custom(function = "validate_role"))]
    pub role: String,

    #[validate(range(min = 1, message = "Candidate number must be positive"))]
    pub candidate_no: i32,

    #[validate(length(min = 1, max = 255, message = "Candidate name is required"))]
    pub candidate_name: String,

    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCandidate {
    #[validate(custom(function = "validate_role"))]
    pub role: String,

    #[validate(range(min = 1, message = "Candidate number must be positive"))]
    pub candidate_no: i32,

    #[validate(length(min = 1, max = 255, message = "Candidate name is required"))]
    pub candidate_name: String,

    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteCandidateRequest {
    pub id: i32,
}

pub fn validate_role(role: &str) -> Result<(), validator::ValidationError> {
    const VALID_ROLES: &[&str] = &["Mr", "Ms"];

    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_role"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mr_and_ms() {
        assert!(validate_role("Mr").is_ok());
        assert!(validate_role("Ms").is_ok());
    }

    #[test]
    fn rejects_other_roles() {
        assert!(validate_role("Mx").is_err());
        assert!(validate_role("mr").is_err());
        assert!(validate_role("").is_err());
    }

    #[test]
    fn create_validates_fields() {
        let req = CreateCandidate {
            year: "2025".to_string(),
            role: "Ms".to_string(),
            candidate_no: 3,
            candidate_name: "Alex Reyes".to_string(),
            image_url: "https://storage.example/candidates/c3.png".to_string(),
        };
        assert!(req.validate().is_ok());

        let bad = CreateCandidate {
            candidate_no: 0,
            ..req
        };
        assert!(bad.validate().is_err());
    }
}
