use bookmarks_core::AppError;
use thiserror::Error;

/// Failures of the bookmark store.
///
/// `NotFound` covers both a missing record and a record owned by someone
/// else; callers cannot tell the two apart. `Unauthorized` is raised when
/// the authenticated owner has no user row.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Enter a valid URL")]
    InvalidUrl,
    #[error("URL already exists")]
    DuplicateUrl,
    #[error("Item not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<BookmarkError> for AppError {
    fn from(err: BookmarkError) -> Self {
        match err {
            BookmarkError::Unauthorized => AppError::unauthorized(err),
            BookmarkError::InvalidUrl | BookmarkError::DuplicateUrl => AppError::bad_request(err),
            BookmarkError::NotFound => AppError::not_acceptable(err),
            BookmarkError::Database(_) => AppError::internal(err),
        }
    }
}
