use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

use crate::clients::ClientError;

/// Web layer errors. Every handler converts its failures into this type;
/// the response body is always `{errorText}`.
#[derive(Debug)]
pub enum WebError {
    MissingField(String),
    Validation(String),
    NotFound(String),
    Duplicate(String),
    Unauthorized,
    Backend(String),
    Storage(StorageError),
    Internal(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(msg) => write!(f, "Missing field: {}", msg),
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Duplicate(msg) => write!(f, "Duplicate: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Backend(msg) => write!(f, "Backend error: {}", msg),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Internal(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl WebError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::MissingField(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Duplicate(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Self::Backend(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            Self::Storage(StorageError::NotFound) => {
                (StatusCode::NOT_FOUND, "Resource not found.".to_string())
            }
            Self::Storage(e) if e.is_unique_violation() => {
                (StatusCode::CONFLICT, "Duplicate record.".to_string())
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
            Self::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        (status, Json(json!({ "errorText": message }))).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(errors: ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{}: {}", field, e.code))
                })
            })
            .collect();

        Self::Validation(messages.join(" "))
    }
}

impl From<ClientError> for WebError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Unauthorized => Self::Unauthorized,
            ClientError::Service(msg) => Self::Backend(msg),
            ClientError::Request(e) => {
                tracing::error!("Outbound request failed: {}", e);
                Self::Backend("Upstream service unavailable.".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        let cases = [
            (
                WebError::MissingField("x required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                WebError::Validation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (WebError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (WebError::Duplicate("dup".into()), StatusCode::CONFLICT),
            (WebError::Unauthorized, StatusCode::UNAUTHORIZED),
            (WebError::Backend("down".into()), StatusCode::BAD_GATEWAY),
            (
                WebError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn storage_not_found_maps_to_404() {
        let response = WebError::Storage(StorageError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_errors_flatten_into_one_message() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 8, message = "Password too short."))]
            password: String,
        }

        let probe = Probe {
            password: "short".into(),
        };
        let err: WebError = probe.validate().unwrap_err().into();

        match err {
            WebError::Validation(msg) => assert_eq!(msg, "Password too short."),
            other => panic!("unexpected variant: {other}"),
        }
    }
}
