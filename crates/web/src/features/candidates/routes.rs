use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::get};

use super::handlers::{create_candidate, delete_candidate, list_candidates, update_candidate};
use crate::state::AppState;

/// Candidate image uploads travel in the multipart body.
const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_candidates)
                .post(create_candidate)
                .put(update_candidate)
                .delete(delete_candidate),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
