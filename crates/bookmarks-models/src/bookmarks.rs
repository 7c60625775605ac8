use bookmarks_core::PageMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{BookmarkId, UserId};

/// A stored URL plus metadata, owned by exactly one user.
///
/// The JSON form keeps the field names clients already consume: the visit
/// counter is exposed as `visit` and the creation timestamp as `create_at`.
/// The owner is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub url: String,
    /// Three-character code derived from the URL at creation
    pub short_url: String,
    #[serde(rename = "visit")]
    pub visits: i32,
    pub body: String,
    #[serde(skip)]
    pub user_id: UserId,
    pub create_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body of the create and update endpoints.
///
/// Both fields are optional on the wire. A missing `url` is treated as the
/// empty string so it fails URL validation instead of deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookmarkPayload {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl BookmarkPayload {
    /// Splits the payload into `(url, body)` with empty-string defaults.
    pub fn into_parts(self) -> (String, String) {
        (self.url.unwrap_or_default(), self.body.unwrap_or_default())
    }
}

/// Row values for an insert; `id`, `visits` and timestamps come from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub user_id: UserId,
    pub url: String,
    pub short_url: String,
    pub body: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedBookmarksResponse {
    pub data: Vec<Bookmark>,
    pub meta: PageMeta,
}
