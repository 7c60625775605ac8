//! Bookmark store: create, read and update bookmarks scoped to their owner.

pub mod controller;
pub mod error;
pub mod repository;
pub mod router;
pub mod service;
pub mod short_url;
pub mod url_validator;

pub use error::BookmarkError;
pub use repository::{BookmarkRepository, PgBookmarkRepository};
pub use service::BookmarkService;
pub use url_validator::{SyntaxUrlValidator, UrlValidator};
