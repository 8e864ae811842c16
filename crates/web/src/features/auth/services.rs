use storage::error::StorageError;
use storage::repository::user_profile::UserProfileRepository;

use crate::clients::ClientError;
use crate::error::WebError;
use crate::state::AppState;

/// Sign in against the identity provider and resolve the caller's role
/// from the profile table. Returns the access token and the role.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<(String, String), WebError> {
    let session = state
        .identity
        .sign_in(email, password)
        .await
        .map_err(|e| match e {
            // Credential rejections surface verbatim as a 400.
            ClientError::Service(msg) => WebError::Validation(msg),
            other => other.into(),
        })?;

    let profile = UserProfileRepository::new(state.db.pool())
        .find_by_email(email)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::Validation("Cannot find user profile.".to_string()),
            other => other.into(),
        })?;

    Ok((session.access_token, profile.role))
}

/// Resolve the role behind an access token. Unauthorized when the provider
/// does not recognize the token.
pub async fn verify(state: &AppState, access_token: &str) -> Result<String, WebError> {
    let user = state
        .identity
        .get_user(access_token)
        .await
        .map_err(|_| WebError::Unauthorized)?;

    let profile = UserProfileRepository::new(state.db.pool())
        .find_by_user_id(user.id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::Validation("Cannot find user profile.".to_string()),
            other => other.into(),
        })?;

    Ok(profile.role)
}

pub async fn logout(state: &AppState, access_token: &str) -> Result<(), WebError> {
    state.identity.sign_out(access_token).await?;
    Ok(())
}
