use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::UserProfile;

pub struct UserProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserProfileRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<UserProfile>> {
        let users = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT user_id, username, email, role, created_at
            FROM users_info
            ORDER BY created_at
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<UserProfile> {
        let user = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT user_id, username, email, role, created_at
            FROM users_info
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<UserProfile> {
        let user = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT user_id, username, email, role, created_at
            FROM users_info
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
        role: &str,
    ) -> Result<UserProfile> {
        let user = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO users_info (user_id, username, email, role)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, username, email, role, created_at
            "#,
        )
        .bind(user_id)
        .bind(username)
        .bind(email)
        .bind(role)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
        role: &str,
    ) -> Result<UserProfile> {
        let user = sqlx::query_as::<_, UserProfile>(
            r#"
            UPDATE users_info
            SET username = $2, email = $3, role = $4
            WHERE user_id = $1
            RETURNING user_id, username, email, role, created_at
            "#,
        )
        .bind(user_id)
        .bind(username)
        .bind(email)
        .bind(role)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn delete(&self, user_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users_info WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
