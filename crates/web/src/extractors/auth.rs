use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

/// Name of the HttpOnly cookie carrying the identity provider's access token.
pub const SESSION_COOKIE: &str = "session_token";

/// The caller behind the session cookie, resolved against the identity
/// provider. Add as a handler parameter to require a signed-in caller.
pub struct CurrentUser {
    pub user_id: Uuid,
}

#[async_trait::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| WebError::Unauthorized)?;

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(WebError::Unauthorized)?;

        let user = state
            .identity
            .get_user(&token)
            .await
            .map_err(|_| WebError::Unauthorized)?;

        Ok(CurrentUser { user_id: user.id })
    }
}
