use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::error::WebError;
use crate::extractors::auth::SESSION_COOKIE;
use crate::extractors::json::AppJson;
use crate::responses::MessageResponse;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub role: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    #[serde(rename = "isAuth")]
    pub is_auth: bool,
    pub role: String,
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; session cookie set", body = LoginResponse),
        (status = 400, description = "Sign-in rejected by the identity provider")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Response, WebError> {
    let (token, role) = services::login(&state, &req.email, &req.password).await?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Json(LoginResponse { role })).into_response())
}

#[utoipa::path(
    get,
    path = "/auth/verify",
    responses(
        (status = 200, description = "Caller is signed in", body = VerifyResponse),
        (status = 401, description = "No valid session")
    ),
    tag = "auth"
)]
pub async fn verify(State(state): State<AppState>, jar: CookieJar) -> Result<Response, WebError> {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());

    let Some(token) = token else {
        return Ok(unauthenticated());
    };

    match services::verify(&state, &token).await {
        Ok(role) => Ok(Json(VerifyResponse {
            is_auth: true,
            role,
        })
        .into_response()),
        Err(WebError::Unauthorized) => Ok(unauthenticated()),
        Err(other) => Err(other),
    }
}

#[utoipa::path(
    get,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Session ended; cookie cleared", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Result<Response, WebError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        services::logout(&state, cookie.value()).await?;
    }

    let jar = jar.remove(Cookie::from(SESSION_COOKIE));

    Ok((
        jar,
        Json(MessageResponse {
            message: "Successfully logged out.".to_string(),
        }),
    )
        .into_response())
}

fn unauthenticated() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "isAuth": false }))).into_response()
}
