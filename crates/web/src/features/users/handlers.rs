use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::user::{CreateUserRequest, DeleteUserRequest, UpdateUserRequest};
use storage::models::UserProfile;
use validator::Validate;

use crate::error::WebError;
use crate::extractors::json::AppJson;
use crate::responses::StateResponse;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "All account profiles", body = Vec<UserProfile>)
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Response, WebError> {
    let users = services::list_users(state.db.pool()).await?;

    Ok(Json(users).into_response())
}

#[utoipa::path(
    post,
    path = "/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Account created", body = StateResponse),
        (status = 400, description = "Validation failed")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::create_user(&state, &req).await?;

    Ok(Json(StateResponse::success()).into_response())
}

#[utoipa::path(
    put,
    path = "/admin/users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Account updated", body = StateResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Account not found")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_user(&state, &req).await?;

    Ok(Json(StateResponse::success()).into_response())
}

#[utoipa::path(
    delete,
    path = "/admin/users",
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "Account deleted", body = StateResponse),
        (status = 404, description = "Account not found")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<DeleteUserRequest>,
) -> Result<Response, WebError> {
    services::delete_user(&state, req.id).await?;

    Ok(Json(StateResponse::success()).into_response())
}
