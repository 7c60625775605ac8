use anyhow::anyhow;
use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use bookmarks_auth::{Claims, verify_token};
use bookmarks_core::AppError;
use bookmarks_models::UserId;

use crate::state::AppState;

/// Extractor that validates the bearer JWT and yields the caller's identity.
///
/// Rejects with 401 when the header is missing or malformed, the token does
/// not verify, or its subject is not a user ID.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl AuthUser {
    pub fn from_claims(claims: &Claims) -> Result<Self, AppError> {
        let user_id = claims
            .user_id()
            .map(UserId)
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid user ID in token")))?;

        Ok(Self { user_id })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::unauthorized(anyhow!("Missing or invalid authorization header")))?;

        let claims = verify_token(bearer.token(), &state.jwt_config)?;

        Self::from_claims(&claims)
    }
}
