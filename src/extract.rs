//! JSON body extractor whose rejections render as [`AppError`].
//!
//! Axum's plain `Json` answers malformed bodies with a text response; the
//! API always answers `{"error": ...}` with status 400 instead.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use bookmarks_core::AppError;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

fn rejection_to_error(rejection: &JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| rejection_to_error(&rejection))?;

        Ok(AppJson(value))
    }
}
