//! Page-based pagination for list endpoints.
//!
//! Clients page through a collection with two query parameters:
//!
//! - `page`: Page number (1-indexed, default: 1)
//! - `per_page`: Items per page (1-100, default: 1)
//!
//! Responses carry a [`PageMeta`] next to the data:
//!
//! ```json
//! {
//!   "data": [...],
//!   "meta": {
//!     "page": 2,
//!     "pages": 5,
//!     "total_count": 9,
//!     "prev_page": 1,
//!     "next_page": 3,
//!     "has_next": true,
//!     "has_prev": true
//!   }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Page used when the client sends none.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the client sends none.
pub const DEFAULT_PER_PAGE: i64 = 1;
/// Upper bound applied to `per_page`.
pub const MAX_PER_PAGE: i64 = 100;

/// Deserializes an optional string into an optional i64.
///
/// Empty strings and values that do not parse as an integer are treated as
/// `None`, so the caller falls back to the default.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<i64>().ok()))
}

/// Query parameters for page-based pagination.
///
/// `page` is clamped to a minimum of 1 and `per_page` to the range
/// [1, [`MAX_PER_PAGE`]].
///
/// # Example
///
/// ```ignore
/// // GET /api/v1/bookmarks?page=3&per_page=20
/// let params = PageParams { page: Some(3), per_page: Some(20) };
///
/// assert_eq!(params.offset(), 40);
/// ```
#[derive(Debug, Clone, Default, Hash, Deserialize, ToSchema)]
pub struct PageParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub per_page: Option<i64>,
}

impl PageParams {
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    #[must_use]
    pub fn per_page(&self) -> i64 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }

    /// Rows to skip before the requested page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }
}

/// Navigation metadata for one page of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    /// Current page number
    pub page: i64,
    /// Total number of pages (0 when the collection is empty)
    pub pages: i64,
    /// Total number of items across all pages
    pub total_count: i64,
    /// Previous page number, null on the first page
    pub prev_page: Option<i64>,
    /// Next page number, null on the last page
    pub next_page: Option<i64>,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    /// Builds the metadata for `page` of a collection holding `total` items.
    ///
    /// `page` and `per_page` are expected to be already clamped, see
    /// [`PageParams::page`] and [`PageParams::per_page`].
    #[must_use]
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total = total.max(0);
        let pages = (total + per_page - 1) / per_page;
        let has_prev = page > 1;
        let has_next = page < pages;

        Self {
            page,
            pages,
            total_count: total,
            prev_page: has_prev.then(|| page - 1),
            next_page: has_next.then(|| page + 1),
            has_next,
            has_prev,
        }
    }
}
