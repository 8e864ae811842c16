use anyhow::{Context, Result};

/// Process configuration, read once at startup and injected into handlers
/// through application state. Nothing rereads the environment per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub identity_url: String,
    pub identity_service_key: String,
    pub storage_url: String,
    pub storage_service_key: String,
    pub storage_bucket: String,
    pub allowed_email_domain: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            identity_url: std::env::var("IDENTITY_URL")
                .context("Cannot load IDENTITY_URL env variable")?,
            identity_service_key: std::env::var("IDENTITY_SERVICE_KEY")
                .context("Cannot load IDENTITY_SERVICE_KEY env variable")?,
            storage_url: std::env::var("STORAGE_URL")
                .context("Cannot load STORAGE_URL env variable")?,
            storage_service_key: std::env::var("STORAGE_SERVICE_KEY")
                .context("Cannot load STORAGE_SERVICE_KEY env variable")?,
            storage_bucket: std::env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "candidates".to_string()),
            allowed_email_domain: std::env::var("ALLOWED_EMAIL_DOMAIN")
                .context("Cannot load ALLOWED_EMAIL_DOMAIN env variable")?,
        })
    }
}
