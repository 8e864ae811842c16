use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{login, logout, verify};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/auth/verify", get(verify))
        .route("/auth/logout", get(logout))
}
