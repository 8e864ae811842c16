use sqlx::PgPool;
use storage::{error::Result, models::Year, repository::year::YearRepository};

/// List all years.
pub async fn list_years(pool: &PgPool) -> Result<Vec<Year>> {
    let repo = YearRepository::new(pool);
    repo.list().await
}
