use axum::{
    Json,
    extract::{Multipart, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::dto::candidate::DeleteCandidateRequest;
use storage::models::Candidate;
use utoipa::IntoParams;

use crate::error::WebError;
use crate::extractors::json::AppJson;
use crate::responses::StateResponse;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct YearQuery {
    pub year: Option<String>,
}

/// An uploaded image part.
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Candidate multipart form as received; presence is checked in the service.
#[derive(Default)]
pub struct CandidateForm {
    pub id: Option<i32>,
    pub year: Option<String>,
    pub role: Option<String>,
    pub candidate_no: Option<i32>,
    pub candidate_name: Option<String>,
    pub image: Option<ImageUpload>,
}

#[utoipa::path(
    get,
    path = "/admin/candidates",
    params(YearQuery),
    responses(
        (status = 200, description = "Candidates for the requested year", body = Vec<Candidate>),
        (status = 400, description = "Year missing")
    ),
    tag = "candidates"
)]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> Result<Response, WebError> {
    let year = query
        .year
        .ok_or_else(|| WebError::MissingField("Year is required.".to_string()))?;

    let candidates = services::list_candidates(state.db.pool(), &year).await?;

    Ok(Json(candidates).into_response())
}

#[utoipa::path(
    post,
    path = "/admin/candidates",
    request_body(content_type = "multipart/form-data", description = "Candidate fields plus candidate_image file"),
    responses(
        (status = 200, description = "Candidate created", body = StateResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "Duplicate (year, role, candidate number)")
    ),
    tag = "candidates"
)]
pub async fn create_candidate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, WebError> {
    let form = parse_candidate_form(&mut multipart).await?;

    services::create_candidate(&state, form).await?;

    Ok(Json(StateResponse::success()).into_response())
}

#[utoipa::path(
    put,
    path = "/admin/candidates",
    request_body(content_type = "multipart/form-data", description = "Candidate fields; candidate_image is optional and replaces the stored image"),
    responses(
        (status = 200, description = "Candidate updated", body = StateResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Candidate not found")
    ),
    tag = "candidates"
)]
pub async fn update_candidate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, WebError> {
    let form = parse_candidate_form(&mut multipart).await?;

    services::update_candidate(&state, form).await?;

    Ok(Json(StateResponse::success()).into_response())
}

#[utoipa::path(
    delete,
    path = "/admin/candidates",
    request_body = DeleteCandidateRequest,
    responses(
        (status = 200, description = "Candidate and stored image deleted", body = StateResponse),
        (status = 404, description = "Candidate not found")
    ),
    tag = "candidates"
)]
pub async fn delete_candidate(
    State(state): State<AppState>,
    AppJson(req): AppJson<DeleteCandidateRequest>,
) -> Result<Response, WebError> {
    services::delete_candidate(&state, req.id).await?;

    Ok(Json(StateResponse::success()).into_response())
}

async fn parse_candidate_form(multipart: &mut Multipart) -> Result<CandidateForm, WebError> {
    let mut form = CandidateForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::Validation(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("id") => form.id = Some(parse_int(&text(field).await?, "id")?),
            Some("year") => form.year = Some(text(field).await?),
            Some("role") => form.role = Some(text(field).await?),
            Some("candidate_no") => {
                form.candidate_no = Some(parse_int(&text(field).await?, "candidate_no")?)
            }
            Some("candidate_name") => form.candidate_name = Some(text(field).await?),
            Some("candidate_image") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| WebError::Validation(format!("Upload read error: {e}")))?
                    .to_vec();

                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn text(field: axum::extract::multipart::Field<'_>) -> Result<String, WebError> {
    field
        .text()
        .await
        .map_err(|e| WebError::Validation(format!("Multipart error: {e}")))
}

fn parse_int(value: &str, field: &str) -> Result<i32, WebError> {
    value
        .trim()
        .parse()
        .map_err(|_| WebError::Validation(format!("{field} must be a number.")))
}
