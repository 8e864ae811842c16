use sqlx::PgPool;
use storage::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use storage::error::StorageError;
use storage::models::Category;
use storage::repository::category::CategoryRepository;
use storage::repository::year::YearRepository;

use crate::error::WebError;

pub async fn list_categories(pool: &PgPool, year: &str) -> Result<Vec<Category>, WebError> {
    let repo = CategoryRepository::new(pool);
    Ok(repo.list_by_year(year).await?)
}

/// Create a category after applying the submission rules (presence,
/// per-criterion completeness, sum to 100 — first failing rule wins).
pub async fn create_category(pool: &PgPool, req: &CreateCategoryRequest) -> Result<Category, WebError> {
    let (year, name, percentage, criteria) =
        req.validate_rules().map_err(WebError::Validation)?;

    let repo = CategoryRepository::new(pool);
    Ok(repo.create(&year, &name, percentage, &criteria).await?)
}

pub async fn update_category(pool: &PgPool, req: &UpdateCategoryRequest) -> Result<Category, WebError> {
    let (name, percentage, criteria) = req.validate_rules().map_err(WebError::Validation)?;

    let repo = CategoryRepository::new(pool);
    let category = repo
        .update(req.id, &name, percentage, &criteria)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::NotFound("Cannot find category.".to_string()),
            other => other.into(),
        })?;

    Ok(category)
}

pub async fn delete_category(pool: &PgPool, id: i32) -> Result<(), WebError> {
    let repo = CategoryRepository::new(pool);
    repo.delete(id).await.map_err(|e| match e {
        StorageError::NotFound => WebError::NotFound("Cannot find category.".to_string()),
        other => other.into(),
    })
}

/// Categories scoped to the year currently flagged active.
pub async fn list_active_year_categories(pool: &PgPool) -> Result<Vec<Category>, WebError> {
    let year = YearRepository::new(pool).find_active().await.map_err(|e| match e {
        StorageError::NotFound => WebError::NotFound("No year found!".to_string()),
        other => other.into(),
    })?;

    let repo = CategoryRepository::new(pool);
    Ok(repo.list_by_year(&year.year).await?)
}
