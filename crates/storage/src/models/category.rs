use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A scoring category with its embedded criteria list. Criteria are owned
/// by the category and never addressed on their own.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub year: String,
    pub name: String,
    pub percentage: i32,
    #[schema(value_type = Vec<Criterion>)]
    pub criteria: sqlx::types::Json<Vec<Criterion>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Criterion {
    pub criteria_name: String,
    pub percentage: i32,
}
