//! # Bookmarks Models
//!
//! Domain models and DTOs for the Bookmarks API:
//!
//! - [`bookmarks`]: The bookmark record, request bodies and paginated listing
//! - [`ids`]: Strongly-typed integer identifiers
//!
//! Models derive `sqlx::FromRow` for query mapping, `serde` traits for the
//! JSON API and `utoipa::ToSchema` for the OpenAPI document.

pub mod bookmarks;
pub mod ids;

pub use bookmarks::{Bookmark, BookmarkPayload, NewBookmark, PaginatedBookmarksResponse};
pub use ids::{BookmarkId, UserId};
