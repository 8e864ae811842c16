use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::WebError;

/// A `Json<T>` wrapper that converts deserialization failures into the
/// standard `{errorText}` body instead of axum's plain-text rejection.
pub struct AppJson<T>(pub T);

#[async_trait::async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| WebError::Validation(e.body_text()))?;

        Ok(AppJson(value))
    }
}
