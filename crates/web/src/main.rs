use std::sync::Arc;

use anyhow::Context;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod clients;
mod config;
mod error;
mod extractors;
mod features;
mod middleware;
mod responses;
mod state;

use clients::identity::HttpIdentityProvider;
use clients::images::HttpImageStore;
use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::login,
        features::auth::handlers::verify,
        features::auth::handlers::logout,
        features::years::handlers::list_years,
        features::categories::handlers::list_categories,
        features::categories::handlers::create_category,
        features::categories::handlers::update_category,
        features::categories::handlers::delete_category,
        features::categories::handlers::list_active_year_categories,
        features::candidates::handlers::list_candidates,
        features::candidates::handlers::create_candidate,
        features::candidates::handlers::update_candidate,
        features::candidates::handlers::delete_candidate,
        features::users::handlers::list_users,
        features::users::handlers::create_user,
        features::users::handlers::update_user,
        features::users::handlers::delete_user,
        features::ballots::handlers::get_ballot,
        features::ballots::handlers::submit_scores,
    ),
    components(
        schemas(
            storage::models::Year,
            storage::models::Category,
            storage::models::Criterion,
            storage::models::Candidate,
            storage::models::ScoreRecord,
            storage::models::CriterionScore,
            storage::models::UserProfile,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::category::DeleteCategoryRequest,
            storage::dto::category::CriterionInput,
            storage::dto::candidate::DeleteCandidateRequest,
            storage::dto::score::SubmitScoresRequest,
            storage::dto::score::SubmitScoresResponse,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::user::DeleteUserRequest,
            storage::dto::ballot::BallotRow,
            storage::dto::ballot::BallotCriterion,
            features::auth::handlers::LoginRequest,
            features::auth::handlers::LoginResponse,
            features::auth::handlers::VerifyResponse,
            responses::StateResponse,
            responses::MessageResponse,
        )
    ),
    tags(
        (name = "auth", description = "Sign-in and session endpoints"),
        (name = "years", description = "Pageant year administration"),
        (name = "categories", description = "Scoring category administration"),
        (name = "candidates", description = "Candidate administration"),
        (name = "users", description = "Account administration"),
        (name = "ballots", description = "Judge ballot endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new(
                            extractors::auth::SESSION_COOKIE,
                        ),
                    ),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting pageant scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let identity = Arc::new(HttpIdentityProvider::new(
        &config.identity_url,
        &config.identity_service_key,
    ));
    let images = Arc::new(HttpImageStore::new(
        &config.storage_url,
        &config.storage_service_key,
        &config.storage_bucket,
    ));

    let state = AppState {
        db,
        identity,
        images,
        allowed_email_domain: config.allowed_email_domain.clone(),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = features::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
