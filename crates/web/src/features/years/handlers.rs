use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::models::Year;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/admin/year",
    responses(
        (status = 200, description = "All pageant years", body = Vec<Year>)
    ),
    tag = "years"
)]
pub async fn list_years(State(state): State<AppState>) -> Result<Response, WebError> {
    let years = services::list_years(state.db.pool()).await?;

    Ok(Json(years).into_response())
}
