use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use storage::repository::user_profile::UserProfileRepository;

use crate::error::WebError;
use crate::extractors::auth::SESSION_COOKIE;
use crate::state::AppState;

pub const ADMIN_ROLE: &str = "Admin";

/// Gate for `/admin/*`: admins pass, judges are sent to their own area,
/// anything else (no session, provider error, missing profile) falls
/// closed to the login entry point.
pub async fn admin_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    match resolve_role(&state, &jar).await {
        Ok(role) if role == ADMIN_ROLE => next.run(request).await,
        Ok(_) => Redirect::to("/index").into_response(),
        Err(_) => Redirect::to("/").into_response(),
    }
}

/// Gate for `/index/*`: the judge area. Admins are sent back to `/admin`.
pub async fn judge_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    match resolve_role(&state, &jar).await {
        Ok(role) if role == ADMIN_ROLE => Redirect::to("/admin").into_response(),
        Ok(_) => next.run(request).await,
        Err(_) => Redirect::to("/").into_response(),
    }
}

async fn resolve_role(state: &AppState, jar: &CookieJar) -> Result<String, WebError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(WebError::Unauthorized)?;

    let user = state
        .identity
        .get_user(&token)
        .await
        .map_err(|_| WebError::Unauthorized)?;

    let profile = UserProfileRepository::new(state.db.pool())
        .find_by_user_id(user.id)
        .await?;

    Ok(profile.role)
}
