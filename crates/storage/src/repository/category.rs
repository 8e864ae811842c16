use sqlx::PgPool;
use sqlx::types::Json;

use crate::error::{Result, StorageError};
use crate::models::{Category, Criterion};

pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_year(&self, year: &str) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, year, name, percentage, criteria
            FROM categories
            WHERE year = $1
            ORDER BY id
            "#,
        )
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Find a category by id scoped to the given year.
    pub async fn find_by_id_and_year(&self, id: i32, year: &str) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, year, name, percentage, criteria
            FROM categories
            WHERE id = $1 AND year = $2
            "#,
        )
        .bind(id)
        .bind(year)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    pub async fn create(
        &self,
        year: &str,
        name: &str,
        percentage: i32,
        criteria: &[Criterion],
    ) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (year, name, percentage, criteria)
            VALUES ($1, $2, $3, $4)
            RETURNING id, year, name, percentage, criteria
            "#,
        )
        .bind(year)
        .bind(name)
        .bind(percentage)
        .bind(Json(criteria))
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        percentage: i32,
        criteria: &[Criterion],
    ) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, percentage = $3, criteria = $4
            WHERE id = $1
            RETURNING id, year, name, percentage, criteria
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(percentage)
        .bind(Json(criteria))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
