use sqlx::PgPool;

use crate::dto::candidate::{CreateCandidate, UpdateCandidate};
use crate::error::{Result, StorageError};
use crate::models::Candidate;

pub struct CandidateRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CandidateRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List candidates for a year, ordered by candidate number then role.
    pub async fn list_by_year(&self, year: &str) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, year, role, candidate_no, candidate_name, image_url
            FROM candidates
            WHERE year = $1
            ORDER BY candidate_no ASC, role ASC
            "#,
        )
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Ok(candidates)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, year, role, candidate_no, candidate_name, image_url
            FROM candidates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(candidate)
    }

    /// Insert a candidate. The (year, role, candidate_no) unique constraint
    /// rejects duplicates; callers translate that into their Duplicate error.
    pub async fn create(&self, req: &CreateCandidate) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (year, role, candidate_no, candidate_name, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, year, role, candidate_no, candidate_name, image_url
            "#,
        )
        .bind(&req.year)
        .bind(&req.role)
        .bind(req.candidate_no)
        .bind(&req.candidate_name)
        .bind(&req.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(candidate)
    }

    pub async fn update(&self, id: i32, req: &UpdateCandidate) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            UPDATE candidates
            SET role = $2, candidate_no = $3, candidate_name = $4, image_url = $5
            WHERE id = $1
            RETURNING id, year, role, candidate_no, candidate_name, image_url
            "#,
        )
        .bind(id)
        .bind(&req.role)
        .bind(req.candidate_no)
        .bind(&req.candidate_name)
        .bind(&req.image_url)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(candidate)
    }

    /// Delete a candidate and return the deleted row so the caller can
    /// remove the stored image object.
    pub async fn delete_returning(&self, id: i32) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            DELETE FROM candidates
            WHERE id = $1
            RETURNING id, year, role, candidate_no, candidate_name, image_url
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(candidate)
    }
}
