use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A pageant candidate. (year, role, candidate_no) is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Candidate {
    pub id: i32,
    pub year: String,
    pub role: String,
    pub candidate_no: i32,
    pub candidate_name: String,
    pub image_url: String,
}
