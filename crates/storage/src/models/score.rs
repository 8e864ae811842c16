use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One judge's scores for one candidate in one category. Unique per
/// (judge_id, candidate_id, category_id); writes replace the whole
/// criteria list via upsert, never merge.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScoreRecord {
    pub id: i32,
    pub judge_id: Uuid,
    pub candidate_id: i32,
    pub category_id: i32,
    pub year: String,
    #[schema(value_type = Vec<CriterionScore>)]
    pub criteria: sqlx::types::Json<Vec<CriterionScore>>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CriterionScore {
    pub criteria_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub score: Decimal,
}
