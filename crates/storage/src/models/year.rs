use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A pageant year. At most one row carries `priority = true` at a time;
/// that row is the active year all judging happens against.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Year {
    pub year: String,
    pub priority: bool,
}
