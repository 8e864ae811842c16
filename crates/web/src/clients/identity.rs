use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::{ClientError, Result};

/// An account as reported by the identity service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
}

/// A signed-in session. The access token travels back to the browser in an
/// HttpOnly cookie; the provider owns expiry and revocation.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// The managed identity service. Password sign-in and session lookup for
/// the public flows, plus the admin account API used by user management.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;
    async fn get_user(&self, access_token: &str) -> Result<AuthUser>;
    async fn sign_out(&self, access_token: &str) -> Result<()>;
    async fn admin_create_user(&self, email: &str, password: &str) -> Result<AuthUser>;
    async fn admin_update_user(&self, id: Uuid, email: &str, password: &str) -> Result<()>;
    async fn admin_delete_user(&self, id: Uuid) -> Result<()>;
}

pub struct HttpIdentityProvider {
    base_url: String,
    service_key: String,
    client: reqwest::Client,
}

impl HttpIdentityProvider {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Extract the service's own error message, falling back to the status.
    async fn service_error(response: reqwest::Response) -> ClientError {
        let status = response.status();

        #[derive(Deserialize)]
        struct ErrorBody {
            msg: Option<String>,
            error_description: Option<String>,
            message: Option<String>,
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.msg.or(body.error_description).or(body.message))
            .unwrap_or_else(|| format!("Identity service returned {}", status));

        ClientError::Service(message)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/token?grant_type=password", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.service_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(response.json::<Session>().await?)
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        let url = format!("{}/user", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Unauthorized);
        }

        Ok(response.json::<AuthUser>().await?)
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/logout", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(())
    }

    async fn admin_create_user(&self, email: &str, password: &str) -> Result<AuthUser> {
        let url = format!("{}/admin/users", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&json!({
                "email": email,
                "password": password,
                "email_confirm": true,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(response.json::<AuthUser>().await?)
    }

    async fn admin_update_user(&self, id: Uuid, email: &str, password: &str) -> Result<()> {
        let url = format!("{}/admin/users/{}", self.base_url, id);

        let response = self
            .client
            .put(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(())
    }

    async fn admin_delete_user(&self, id: Uuid) -> Result<()> {
        let url = format!("{}/admin/users/{}", self.base_url, id);

        let response = self
            .client
            .delete(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(())
    }
}
