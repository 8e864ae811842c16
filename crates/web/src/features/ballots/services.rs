use sqlx::PgPool;
use storage::dto::ballot::BallotRow;
use storage::dto::score::ScoreSubmission;
use storage::error::StorageError;
use storage::models::ScoreRecord;
use storage::repository::candidate::CandidateRepository;
use storage::repository::category::CategoryRepository;
use storage::repository::score::ScoreRepository;
use storage::repository::year::YearRepository;
use storage::services::ballot::assemble_ballot;
use uuid::Uuid;

use crate::error::WebError;

/// Build the ballot a judge sees for one category: the category definition
/// scoped to the active year, every candidate of that year, and this
/// judge's existing scores, merged so unscored criteria read zero.
pub async fn build_ballot(
    pool: &PgPool,
    judge_id: Uuid,
    category_id: i32,
) -> Result<Vec<BallotRow>, WebError> {
    let active_year = YearRepository::new(pool).find_active().await.map_err(|e| match e {
        StorageError::NotFound => WebError::NotFound("No year found!".to_string()),
        other => other.into(),
    })?;

    let category = CategoryRepository::new(pool)
        .find_by_id_and_year(category_id, &active_year.year)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::NotFound("Cannot find category.".to_string()),
            other => other.into(),
        })?;

    let candidates = CandidateRepository::new(pool)
        .list_by_year(&active_year.year)
        .await?;

    let scores = ScoreRepository::new(pool)
        .list_for_judge(judge_id, category_id, &active_year.year)
        .await?;

    Ok(assemble_ballot(&category, candidates, &scores))
}

/// Upsert one candidate's criteria scores for this judge; the whole list
/// is replaced, so retries and resubmissions are safe.
pub async fn submit_scores(
    pool: &PgPool,
    submission: &ScoreSubmission,
) -> Result<ScoreRecord, WebError> {
    let repo = ScoreRepository::new(pool);
    Ok(repo.upsert(submission).await?)
}
