//! Persistence seam of the bookmark store.
//!
//! [`BookmarkRepository`] lists the queries the service needs. Every read
//! and write that touches an existing row is scoped by its owner.
//! [`PgBookmarkRepository`] implements them with parameterized SQL against
//! PostgreSQL.

use std::future::Future;
use std::pin::Pin;

use bookmarks_models::{Bookmark, BookmarkId, NewBookmark, UserId};
use sqlx::PgPool;
use tracing::{debug, error, warn};

use super::error::BookmarkError;

pub type RepoFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, BookmarkError>> + Send + 'a>>;

pub trait BookmarkRepository: Send + Sync {
    /// Looks a bookmark up by exact URL, across all owners.
    fn find_by_url<'a>(&'a self, url: &'a str) -> RepoFuture<'a, Option<Bookmark>>;

    fn find_by_owner_and_id(
        &self,
        owner: UserId,
        id: BookmarkId,
    ) -> RepoFuture<'_, Option<Bookmark>>;

    /// Returns up to `limit` of the owner's bookmarks in insertion order,
    /// skipping the first `offset`, plus the owner's total bookmark count.
    /// Both come from the same snapshot.
    fn list_by_owner(
        &self,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> RepoFuture<'_, (Vec<Bookmark>, i64)>;

    /// Persists a new bookmark.
    ///
    /// A URL that is already stored fails with [`BookmarkError::DuplicateUrl`];
    /// an owner with no user row fails with [`BookmarkError::Unauthorized`].
    fn insert<'a>(&'a self, new: &'a NewBookmark) -> RepoFuture<'a, Bookmark>;

    /// Overwrites `url` and `body` of an owned bookmark and refreshes
    /// `updated_at`. Returns `None` when no owned row matched.
    fn update<'a>(
        &'a self,
        owner: UserId,
        id: BookmarkId,
        url: &'a str,
        body: &'a str,
    ) -> RepoFuture<'a, Option<Bookmark>>;
}

#[derive(Clone, Debug)]
pub struct PgBookmarkRepository {
    db: PgPool,
}

impl PgBookmarkRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Maps write failures: a `UNIQUE (url)` violation becomes `DuplicateUrl`,
/// a `user_id` foreign key violation becomes `Unauthorized`.
fn map_write_error(e: sqlx::Error, url: &str) -> BookmarkError {
    let (unique_violation, foreign_key_violation) = match &e {
        sqlx::Error::Database(db_err) => (
            db_err.is_unique_violation(),
            db_err.is_foreign_key_violation(),
        ),
        _ => (false, false),
    };

    if unique_violation {
        warn!(bookmark.url = %url, "URL rejected by unique constraint");
        BookmarkError::DuplicateUrl
    } else if foreign_key_violation {
        warn!(bookmark.url = %url, "Bookmark owner does not exist");
        BookmarkError::Unauthorized
    } else {
        error!(error = %e, bookmark.url = %url, "Database error writing bookmark");
        BookmarkError::Database(e)
    }
}

impl BookmarkRepository for PgBookmarkRepository {
    fn find_by_url<'a>(&'a self, url: &'a str) -> RepoFuture<'a, Option<Bookmark>> {
        Box::pin(async move {
            let bookmark = sqlx::query_as::<_, Bookmark>(
                "SELECT id, url, short_url, visits, body, user_id, create_at, updated_at
                 FROM bookmarks WHERE url = $1",
            )
            .bind(url)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error looking up bookmark by URL");
                BookmarkError::from(e)
            })?;

            Ok(bookmark)
        })
    }

    fn find_by_owner_and_id(
        &self,
        owner: UserId,
        id: BookmarkId,
    ) -> RepoFuture<'_, Option<Bookmark>> {
        Box::pin(async move {
            let bookmark = sqlx::query_as::<_, Bookmark>(
                "SELECT id, url, short_url, visits, body, user_id, create_at, updated_at
                 FROM bookmarks WHERE id = $1 AND user_id = $2",
            )
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, bookmark.id = %id, "Database error fetching bookmark");
                BookmarkError::from(e)
            })?;

            Ok(bookmark)
        })
    }

    fn list_by_owner(
        &self,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> RepoFuture<'_, (Vec<Bookmark>, i64)> {
        Box::pin(async move {
            let mut tx = self.db.begin().await.map_err(|e| {
                error!(error = %e, "Failed to begin transaction");
                BookmarkError::from(e)
            })?;

            // One snapshot for both statements so the count matches the page
            sqlx::Executor::execute(
                &mut *tx,
                sqlx::raw_sql("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY"),
            )
            .await?;

            let total =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookmarks WHERE user_id = $1")
                    .bind(owner)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(|e| {
                        error!(error = %e, "Database error counting bookmarks");
                        BookmarkError::from(e)
                    })?;

            let bookmarks = sqlx::query_as::<_, Bookmark>(
                "SELECT id, url, short_url, visits, body, user_id, create_at, updated_at
                 FROM bookmarks WHERE user_id = $1
                 ORDER BY id ASC
                 LIMIT $2 OFFSET $3",
            )
            .bind(owner)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error listing bookmarks");
                BookmarkError::from(e)
            })?;

            tx.commit().await?;

            debug!(total = %total, returned = %bookmarks.len(), "Bookmarks page fetched");

            Ok((bookmarks, total))
        })
    }

    fn insert<'a>(&'a self, new: &'a NewBookmark) -> RepoFuture<'a, Bookmark> {
        Box::pin(async move {
            sqlx::query_as::<_, Bookmark>(
                "INSERT INTO bookmarks (url, short_url, body, user_id)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, url, short_url, visits, body, user_id, create_at, updated_at",
            )
            .bind(&new.url)
            .bind(&new.short_url)
            .bind(&new.body)
            .bind(new.user_id)
            .fetch_one(&self.db)
            .await
            .map_err(|e| map_write_error(e, &new.url))
        })
    }

    fn update<'a>(
        &'a self,
        owner: UserId,
        id: BookmarkId,
        url: &'a str,
        body: &'a str,
    ) -> RepoFuture<'a, Option<Bookmark>> {
        Box::pin(async move {
            sqlx::query_as::<_, Bookmark>(
                "UPDATE bookmarks SET url = $1, body = $2, updated_at = NOW()
                 WHERE id = $3 AND user_id = $4
                 RETURNING id, url, short_url, visits, body, user_id, create_at, updated_at",
            )
            .bind(url)
            .bind(body)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| map_write_error(e, url))
        })
    }
}
