use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use bookmarks_core::{AppError, PageParams};
use bookmarks_models::{Bookmark, BookmarkId, BookmarkPayload, PaginatedBookmarksResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::service::BookmarkService;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookmarks",
    request_body = BookmarkPayload,
    responses(
        (status = 201, description = "Bookmark created", body = Bookmark),
        (status = 400, description = "Invalid or already stored URL", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Bookmarks",
    security(("bearer_auth" = []))
)]
pub async fn create_bookmark(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppJson(dto): AppJson<BookmarkPayload>,
) -> Result<(StatusCode, Json<Bookmark>), AppError> {
    let bookmark = BookmarkService::create_bookmark(
        state.bookmarks.as_ref(),
        state.url_validator.as_ref(),
        auth_user.user_id,
        dto,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(bookmark)))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookmarks",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default 1, max 100)")
    ),
    responses(
        (status = 200, description = "Paginated list of the caller's bookmarks", body = PaginatedBookmarksResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Bookmarks",
    security(("bearer_auth" = []))
)]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    auth_user: AuthUser,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<PaginatedBookmarksResponse>, AppError> {
    let Query(params) = params
        .map_err(|e| AppError::bad_request(anyhow!("Invalid query parameters: {e}")))?;

    let page =
        BookmarkService::list_bookmarks(state.bookmarks.as_ref(), auth_user.user_id, params)
            .await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookmarks/{id}",
    params(
        ("id" = i64, Path, description = "Bookmark ID")
    ),
    responses(
        (status = 200, description = "Bookmark details", body = Bookmark),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 406, description = "Bookmark not found", body = ErrorResponse)
    ),
    tag = "Bookmarks",
    security(("bearer_auth" = []))
)]
pub async fn get_bookmark(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<BookmarkId>,
) -> Result<Json<Bookmark>, AppError> {
    let bookmark =
        BookmarkService::get_bookmark(state.bookmarks.as_ref(), auth_user.user_id, id).await?;
    Ok(Json(bookmark))
}

#[utoipa::path(
    put,
    path = "/api/v1/bookmarks/{id}",
    params(
        ("id" = i64, Path, description = "Bookmark ID")
    ),
    request_body = BookmarkPayload,
    responses(
        (status = 200, description = "Bookmark updated", body = Bookmark),
        (status = 400, description = "Invalid or already stored URL", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 406, description = "Bookmark not found", body = ErrorResponse)
    ),
    tag = "Bookmarks",
    security(("bearer_auth" = []))
)]
pub async fn update_bookmark(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<BookmarkId>,
    AppJson(dto): AppJson<BookmarkPayload>,
) -> Result<Json<Bookmark>, AppError> {
    let bookmark = BookmarkService::update_bookmark(
        state.bookmarks.as_ref(),
        state.url_validator.as_ref(),
        auth_user.user_id,
        id,
        dto,
    )
    .await?;
    Ok(Json(bookmark))
}
