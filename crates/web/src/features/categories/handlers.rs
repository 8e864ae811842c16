use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::dto::category::{CreateCategoryRequest, DeleteCategoryRequest, UpdateCategoryRequest};
use storage::models::Category;
use utoipa::IntoParams;
use validator::Validate;

use crate::error::WebError;
use crate::extractors::json::AppJson;
use crate::responses::StateResponse;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct YearQuery {
    pub year: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/categories",
    params(YearQuery),
    responses(
        (status = 200, description = "Categories for the requested year", body = Vec<Category>),
        (status = 400, description = "Year missing")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> Result<Response, WebError> {
    let year = query
        .year
        .ok_or_else(|| WebError::MissingField("Year is required.".to_string()))?;

    let categories = services::list_categories(state.db.pool(), &year).await?;

    Ok(Json(categories).into_response())
}

#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = StateResponse),
        (status = 400, description = "Validation failed")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::create_category(state.db.pool(), &req).await?;

    Ok(Json(StateResponse::success()).into_response())
}

#[utoipa::path(
    put,
    path = "/admin/categories",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = StateResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    AppJson(req): AppJson<UpdateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_category(state.db.pool(), &req).await?;

    Ok(Json(StateResponse::success()).into_response())
}

#[utoipa::path(
    delete,
    path = "/admin/categories",
    request_body = DeleteCategoryRequest,
    responses(
        (status = 200, description = "Category deleted", body = StateResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    AppJson(req): AppJson<DeleteCategoryRequest>,
) -> Result<Response, WebError> {
    services::delete_category(state.db.pool(), req.id).await?;

    Ok(Json(StateResponse::success()).into_response())
}

#[utoipa::path(
    get,
    path = "/index/categories",
    responses(
        (status = 200, description = "Categories for the active year", body = Vec<Category>),
        (status = 404, description = "No active year")
    ),
    tag = "categories"
)]
pub async fn list_active_year_categories(
    State(state): State<AppState>,
) -> Result<Response, WebError> {
    let categories = services::list_active_year_categories(state.db.pool()).await?;

    Ok(Json(categories).into_response())
}
