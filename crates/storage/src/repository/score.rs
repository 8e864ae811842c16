use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::dto::score::ScoreSubmission;
use crate::error::Result;
use crate::models::ScoreRecord;

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All of one judge's score records for a category and year.
    pub async fn list_for_judge(
        &self,
        judge_id: Uuid,
        category_id: i32,
        year: &str,
    ) -> Result<Vec<ScoreRecord>> {
        let scores = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT id, judge_id, candidate_id, category_id, year, criteria, updated_at
            FROM scores
            WHERE judge_id = $1 AND category_id = $2 AND year = $3
            "#,
        )
        .bind(judge_id)
        .bind(category_id)
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Upsert keyed on (judge, candidate, category): the criteria list is
    /// replaced wholesale, so resubmission overwrites rather than
    /// duplicates and retries are safe.
    pub async fn upsert(&self, submission: &ScoreSubmission) -> Result<ScoreRecord> {
        let record = sqlx::query_as::<_, ScoreRecord>(
            r#"
            INSERT INTO scores (judge_id, candidate_id, category_id, year, criteria)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (judge_id, candidate_id, category_id)
            DO UPDATE SET criteria = EXCLUDED.criteria,
                          year = EXCLUDED.year,
                          updated_at = now()
            RETURNING id, judge_id, candidate_id, category_id, year, criteria, updated_at
            "#,
        )
        .bind(submission.judge_id)
        .bind(submission.candidate_id)
        .bind(submission.category_id)
        .bind(&submission.year)
        .bind(Json(&submission.criteria))
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }
}
