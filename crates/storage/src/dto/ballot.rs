use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of a judge's ballot: a candidate with the category's criteria
/// and this judge's current scores (zero where unscored).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BallotRow {
    pub year: String,
    pub candidate_id: i32,
    pub image_url: String,
    pub candidate_name: String,
    pub candidate_no: i32,
    pub role: String,

    pub name: String,
    pub percentage: i32,

    pub criteria: Vec<BallotCriterion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BallotCriterion {
    pub criteria_name: String,
    pub percentage: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub score: Decimal,
}
