use sqlx::PgPool;
use storage::dto::user::{CreateUserRequest, UpdateUserRequest, email_domain_matches};
use storage::models::UserProfile;
use storage::repository::user_profile::UserProfileRepository;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

pub async fn list_users(pool: &PgPool) -> Result<Vec<UserProfile>, WebError> {
    let repo = UserProfileRepository::new(pool);
    Ok(repo.list().await?)
}

/// Create an account: the identity provider holds the credential, then the
/// profile row is inserted with the provider's account id.
pub async fn create_user(state: &AppState, req: &CreateUserRequest) -> Result<UserProfile, WebError> {
    require_institutional_email(&req.email, &state.allowed_email_domain)?;

    let account = state
        .identity
        .admin_create_user(&req.email, &req.password)
        .await?;

    let repo = UserProfileRepository::new(state.db.pool());
    Ok(repo
        .create(account.id, &req.username, &req.email, &req.role)
        .await?)
}

pub async fn update_user(state: &AppState, req: &UpdateUserRequest) -> Result<UserProfile, WebError> {
    require_institutional_email(&req.email, &state.allowed_email_domain)?;

    state
        .identity
        .admin_update_user(req.id, &req.email, &req.password)
        .await?;

    let repo = UserProfileRepository::new(state.db.pool());
    Ok(repo
        .update(req.id, &req.username, &req.email, &req.role)
        .await?)
}

/// Delete the identity account first, then the profile row; no cascade
/// exists across the two stores.
pub async fn delete_user(state: &AppState, id: Uuid) -> Result<(), WebError> {
    state.identity.admin_delete_user(id).await?;

    let repo = UserProfileRepository::new(state.db.pool());
    repo.delete(id).await?;

    Ok(())
}

fn require_institutional_email(email: &str, domain: &str) -> Result<(), WebError> {
    if email_domain_matches(email, domain) {
        Ok(())
    } else {
        Err(WebError::Validation(
            "Email must use the institutional domain.".to_string(),
        ))
    }
}
