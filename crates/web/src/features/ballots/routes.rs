use axum::{Router, routing::get};

use super::handlers::{get_ballot, submit_scores};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/candidates", get(get_ballot).patch(submit_scores))
}
