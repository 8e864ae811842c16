pub mod auth;
pub mod ballots;
pub mod candidates;
pub mod categories;
pub mod users;
pub mod years;

use axum::{Router, middleware};

use crate::middleware::role_gate::{admin_gate, judge_gate};
use crate::state::AppState;

/// Assemble the full application router: the ungated auth entry points,
/// the admin area, and the judge area, each behind its role gate.
pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .nest("/year", years::routes())
        .nest("/categories", categories::admin_routes())
        .nest("/candidates", candidates::routes())
        .nest("/users", users::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_gate));

    let index = Router::new()
        .merge(categories::index_routes())
        .merge(ballots::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), judge_gate));

    Router::new()
        .merge(auth::routes())
        .nest("/admin", admin)
        .nest("/index", index)
        .with_state(state)
}
