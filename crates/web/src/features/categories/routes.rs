use axum::{Router, routing::get};

use super::handlers::{
    create_category, delete_category, list_active_year_categories, list_categories,
    update_category,
};
use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_categories)
            .post(create_category)
            .put(update_category)
            .delete(delete_category),
    )
}

pub fn index_routes() -> Router<AppState> {
    Router::new().route("/categories", get(list_active_year_categories))
}
