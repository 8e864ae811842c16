use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Year;

pub struct YearRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> YearRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all years, newest label first.
    pub async fn list(&self) -> Result<Vec<Year>> {
        let years = sqlx::query_as::<_, Year>(
            "SELECT year, priority FROM years ORDER BY year DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(years)
    }

    /// The single year flagged with priority. A partial unique index keeps
    /// at most one such row; none flagged means judging is closed.
    pub async fn find_active(&self) -> Result<Year> {
        let year = sqlx::query_as::<_, Year>(
            "SELECT year, priority FROM years WHERE priority = TRUE",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(year)
    }
}
