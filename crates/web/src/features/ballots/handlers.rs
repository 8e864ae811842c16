use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::dto::ballot::BallotRow;
use storage::dto::score::{SubmitScoresRequest, SubmitScoresResponse};
use utoipa::IntoParams;

use crate::error::WebError;
use crate::extractors::auth::CurrentUser;
use crate::extractors::json::AppJson;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct BallotQuery {
    pub category: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/index/candidates",
    params(BallotQuery),
    responses(
        (status = 200, description = "Ballot rows for the active year", body = Vec<BallotRow>),
        (status = 400, description = "Category missing"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No active year or category not found")
    ),
    tag = "ballots"
)]
pub async fn get_ballot(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<BallotQuery>,
) -> Result<Response, WebError> {
    let category_id = query
        .category
        .ok_or_else(|| WebError::MissingField("Category ID is required.".to_string()))?;

    let rows = services::build_ballot(state.db.pool(), user.user_id, category_id).await?;

    Ok(Json(rows).into_response())
}

#[utoipa::path(
    patch,
    path = "/index/candidates",
    request_body = SubmitScoresRequest,
    responses(
        (status = 200, description = "Scores upserted", body = SubmitScoresResponse),
        (status = 400, description = "Required field missing"),
        (status = 401, description = "Not signed in")
    ),
    tag = "ballots"
)]
pub async fn submit_scores(
    State(state): State<AppState>,
    user: CurrentUser,
    AppJson(req): AppJson<SubmitScoresRequest>,
) -> Result<Response, WebError> {
    let submission = req
        .into_submission(user.user_id)
        .map_err(WebError::MissingField)?;

    let record = services::submit_scores(state.db.pool(), &submission).await?;

    Ok(Json(SubmitScoresResponse {
        message: "Score updated successfully".to_string(),
        updated_score: record,
    })
    .into_response())
}
