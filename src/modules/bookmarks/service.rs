use bookmarks_core::{PageMeta, PageParams};
use bookmarks_models::{
    Bookmark, BookmarkId, BookmarkPayload, NewBookmark, PaginatedBookmarksResponse, UserId,
};
use tracing::{debug, info, instrument, warn};

use super::error::BookmarkError;
use super::repository::BookmarkRepository;
use super::short_url::short_code;
use super::url_validator::UrlValidator;

pub struct BookmarkService;

impl BookmarkService {
    #[instrument(skip(repo, urls, payload), fields(user.id = %owner, db.operation = "INSERT", db.table = "bookmarks"))]
    pub async fn create_bookmark(
        repo: &dyn BookmarkRepository,
        urls: &dyn UrlValidator,
        owner: UserId,
        payload: BookmarkPayload,
    ) -> Result<Bookmark, BookmarkError> {
        let (url, body) = payload.into_parts();

        if !urls.is_valid(&url) {
            debug!(bookmark.url = %url, "Rejected invalid URL");
            return Err(BookmarkError::InvalidUrl);
        }

        if repo.find_by_url(&url).await?.is_some() {
            warn!(bookmark.url = %url, "Attempted to create bookmark with existing URL");
            return Err(BookmarkError::DuplicateUrl);
        }

        let new = NewBookmark {
            user_id: owner,
            short_url: short_code(&url),
            url,
            body,
        };
        let bookmark = repo.insert(&new).await?;

        info!(
            bookmark.id = %bookmark.id,
            bookmark.short_url = %bookmark.short_url,
            "Bookmark created successfully"
        );

        Ok(bookmark)
    }

    #[instrument(skip(repo), fields(user.id = %owner, bookmark.id = %id, db.operation = "SELECT", db.table = "bookmarks"))]
    pub async fn get_bookmark(
        repo: &dyn BookmarkRepository,
        owner: UserId,
        id: BookmarkId,
    ) -> Result<Bookmark, BookmarkError> {
        repo.find_by_owner_and_id(owner, id)
            .await?
            .ok_or_else(|| {
                debug!("Bookmark not found for owner");
                BookmarkError::NotFound
            })
    }

    #[instrument(skip(repo, params), fields(user.id = %owner, db.operation = "SELECT", db.table = "bookmarks"))]
    pub async fn list_bookmarks(
        repo: &dyn BookmarkRepository,
        owner: UserId,
        params: PageParams,
    ) -> Result<PaginatedBookmarksResponse, BookmarkError> {
        let page = params.page();
        let per_page = params.per_page();

        debug!(page = %page, per_page = %per_page, "Fetching bookmarks page");

        let (data, total) = repo
            .list_by_owner(owner, per_page, params.offset())
            .await?;

        Ok(PaginatedBookmarksResponse {
            data,
            meta: PageMeta::new(page, per_page, total),
        })
    }

    /// Overwrites `url` and `body` of an owned bookmark.
    ///
    /// Ownership is checked before the URL so a foreign id answers
    /// `NotFound` whatever the payload. The URL is not checked for
    /// uniqueness here; a collision surfaces from the storage constraint.
    #[instrument(skip(repo, urls, payload), fields(user.id = %owner, bookmark.id = %id, db.operation = "UPDATE", db.table = "bookmarks"))]
    pub async fn update_bookmark(
        repo: &dyn BookmarkRepository,
        urls: &dyn UrlValidator,
        owner: UserId,
        id: BookmarkId,
        payload: BookmarkPayload,
    ) -> Result<Bookmark, BookmarkError> {
        let existing = Self::get_bookmark(repo, owner, id).await?;

        let (url, body) = payload.into_parts();
        if !urls.is_valid(&url) {
            debug!(bookmark.url = %url, "Rejected invalid URL");
            return Err(BookmarkError::InvalidUrl);
        }

        let bookmark = repo
            .update(owner, existing.id, &url, &body)
            .await?
            .ok_or(BookmarkError::NotFound)?;

        info!(bookmark.id = %bookmark.id, "Bookmark updated successfully");

        Ok(bookmark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::bookmarks::repository::RepoFuture;
    use crate::modules::bookmarks::url_validator::SyntaxUrlValidator;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory store that enforces the same URL uniqueness as the table.
    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<Vec<Bookmark>>,
        /// Hide existing rows from `find_by_url`, as a concurrent insert would.
        racing: bool,
    }

    impl MemoryRepository {
        fn racing() -> Self {
            Self {
                racing: true,
                ..Self::default()
            }
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    impl BookmarkRepository for MemoryRepository {
        fn find_by_url<'a>(&'a self, url: &'a str) -> RepoFuture<'a, Option<Bookmark>> {
            Box::pin(async move {
                if self.racing {
                    return Ok(None);
                }
                let rows = self.rows.lock().unwrap();
                Ok(rows.iter().find(|b| b.url == url).cloned())
            })
        }

        fn find_by_owner_and_id(
            &self,
            owner: UserId,
            id: BookmarkId,
        ) -> RepoFuture<'_, Option<Bookmark>> {
            Box::pin(async move {
                let rows = self.rows.lock().unwrap();
                Ok(rows
                    .iter()
                    .find(|b| b.id == id && b.user_id == owner)
                    .cloned())
            })
        }

        fn list_by_owner(
            &self,
            owner: UserId,
            limit: i64,
            offset: i64,
        ) -> RepoFuture<'_, (Vec<Bookmark>, i64)> {
            Box::pin(async move {
                let rows = self.rows.lock().unwrap();
                let owned: Vec<_> = rows.iter().filter(|b| b.user_id == owner).collect();
                let total = owned.len() as i64;
                let data = owned
                    .into_iter()
                    .skip(offset as usize)
                    .take(limit as usize)
                    .cloned()
                    .collect();
                Ok((data, total))
            })
        }

        fn insert<'a>(&'a self, new: &'a NewBookmark) -> RepoFuture<'a, Bookmark> {
            Box::pin(async move {
                let mut rows = self.rows.lock().unwrap();
                if rows.iter().any(|b| b.url == new.url) {
                    return Err(BookmarkError::DuplicateUrl);
                }
                let now = Utc::now();
                let bookmark = Bookmark {
                    id: BookmarkId(rows.len() as i64 + 1),
                    url: new.url.clone(),
                    short_url: new.short_url.clone(),
                    visits: 0,
                    body: new.body.clone(),
                    user_id: new.user_id,
                    create_at: now,
                    updated_at: now,
                };
                rows.push(bookmark.clone());
                Ok(bookmark)
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
                let mut rows = self.rows.lock().unwrap();
                if rows.iter().any(|b| b.url == url && b.id != id) {
                    return Err(BookmarkError::DuplicateUrl);
                }
                let Some(row) = rows
                    .iter_mut()
                    .find(|b| b.id == id && b.user_id == owner)
                else {
                    return Ok(None);
                };
                row.url = url.to_string();
                row.body = body.to_string();
                row.updated_at = Utc::now();
                Ok(Some(row.clone()))
            })
        }
    }

    const ALICE: UserId = UserId(1);
    const BOB: UserId = UserId(2);

    fn payload(url: &str, body: &str) -> BookmarkPayload {
        BookmarkPayload {
            url: Some(url.to_string()),
            body: Some(body.to_string()),
        }
    }

    async fn create(repo: &MemoryRepository, owner: UserId, url: &str) -> Bookmark {
        BookmarkService::create_bookmark(repo, &SyntaxUrlValidator, owner, payload(url, ""))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_bookmark_defaults() {
        let repo = MemoryRepository::default();
        let bookmark = BookmarkService::create_bookmark(
            &repo,
            &SyntaxUrlValidator,
            ALICE,
            BookmarkPayload {
                url: Some("https://example.com".to_string()),
                body: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(bookmark.url, "https://example.com");
        assert_eq!(bookmark.body, "");
        assert_eq!(bookmark.visits, 0);
        assert_eq!(bookmark.user_id, ALICE);
        assert_eq!(bookmark.short_url, short_code("https://example.com"));
    }

    #[tokio::test]
    async fn test_create_bookmark_invalid_url_persists_nothing() {
        let repo = MemoryRepository::default();
        let result =
            BookmarkService::create_bookmark(&repo, &SyntaxUrlValidator, ALICE, payload("not-a-url", "x"))
                .await;

        assert!(matches!(result, Err(BookmarkError::InvalidUrl)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_create_bookmark_missing_url_is_invalid() {
        let repo = MemoryRepository::default();
        let result = BookmarkService::create_bookmark(
            &repo,
            &SyntaxUrlValidator,
            ALICE,
            BookmarkPayload::default(),
        )
        .await;

        assert!(matches!(result, Err(BookmarkError::InvalidUrl)));
    }

    #[tokio::test]
    async fn test_create_bookmark_duplicate_across_owners() {
        let repo = MemoryRepository::default();
        create(&repo, ALICE, "https://example.com").await;

        let result = BookmarkService::create_bookmark(
            &repo,
            &SyntaxUrlValidator,
            BOB,
            payload("https://example.com", "mine too"),
        )
        .await;

        assert!(matches!(result, Err(BookmarkError::DuplicateUrl)));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_create_bookmark_race_loser_gets_duplicate() {
        let repo = MemoryRepository::racing();
        create(&repo, ALICE, "https://example.com").await;

        let result = BookmarkService::create_bookmark(
            &repo,
            &SyntaxUrlValidator,
            BOB,
            payload("https://example.com", ""),
        )
        .await;

        assert!(matches!(result, Err(BookmarkError::DuplicateUrl)));
    }

    #[tokio::test]
    async fn test_get_bookmark_is_owner_scoped() {
        let repo = MemoryRepository::default();
        let bookmark = create(&repo, ALICE, "https://example.com").await;

        let found = BookmarkService::get_bookmark(&repo, ALICE, bookmark.id)
            .await
            .unwrap();
        assert_eq!(found, bookmark);

        let foreign = BookmarkService::get_bookmark(&repo, BOB, bookmark.id).await;
        assert!(matches!(foreign, Err(BookmarkError::NotFound)));

        let missing = BookmarkService::get_bookmark(&repo, ALICE, BookmarkId(999)).await;
        assert!(matches!(missing, Err(BookmarkError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_bookmarks_page_counts() {
        let repo = MemoryRepository::default();
        for i in 0..7 {
            create(&repo, ALICE, &format!("https://example.com/{i}")).await;
        }
        create(&repo, BOB, "https://bob.example.com").await;

        let params = |page| PageParams {
            page: Some(page),
            per_page: Some(3),
        };

        let first = BookmarkService::list_bookmarks(&repo, ALICE, params(1))
            .await
            .unwrap();
        assert_eq!(first.meta.pages, 3);
        assert_eq!(first.meta.total_count, 7);
        assert_eq!(first.data.len(), 3);
        assert_eq!(first.data[0].url, "https://example.com/0");
        assert!(first.meta.has_next);
        assert!(!first.meta.has_prev);

        let last = BookmarkService::list_bookmarks(&repo, ALICE, params(3))
            .await
            .unwrap();
        assert_eq!(last.data.len(), 1);
        assert_eq!(last.meta.next_page, None);
        assert_eq!(last.meta.prev_page, Some(2));

        let beyond = BookmarkService::list_bookmarks(&repo, ALICE, params(4))
            .await
            .unwrap();
        assert!(beyond.data.is_empty());
    }

    #[tokio::test]
    async fn test_list_bookmarks_default_page_size() {
        let repo = MemoryRepository::default();
        create(&repo, ALICE, "https://a.example.com").await;
        create(&repo, ALICE, "https://b.example.com").await;

        let response = BookmarkService::list_bookmarks(&repo, ALICE, PageParams::default())
            .await
            .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.meta.pages, 2);
        assert_eq!(response.meta.next_page, Some(2));
    }

    #[tokio::test]
    async fn test_update_bookmark_keeps_identity() {
        let repo = MemoryRepository::default();
        let original = create(&repo, ALICE, "https://example.com").await;

        let updated = BookmarkService::update_bookmark(
            &repo,
            &SyntaxUrlValidator,
            ALICE,
            original.id,
            payload("https://example.org", "changed"),
        )
        .await
        .unwrap();

        assert_eq!(updated.url, "https://example.org");
        assert_eq!(updated.body, "changed");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.user_id, original.user_id);
        assert_eq!(updated.short_url, original.short_url);
        assert_eq!(updated.create_at, original.create_at);
    }

    #[tokio::test]
    async fn test_update_bookmark_invalid_url_leaves_record() {
        let repo = MemoryRepository::default();
        let original = create(&repo, ALICE, "https://example.com").await;

        let result = BookmarkService::update_bookmark(
            &repo,
            &SyntaxUrlValidator,
            ALICE,
            original.id,
            payload("not-a-url", "x"),
        )
        .await;
        assert!(matches!(result, Err(BookmarkError::InvalidUrl)));

        let stored = BookmarkService::get_bookmark(&repo, ALICE, original.id)
            .await
            .unwrap();
        assert_eq!(stored, original);
    }

    #[tokio::test]
    async fn test_update_bookmark_foreign_id_is_not_found_before_validation() {
        let repo = MemoryRepository::default();
        let original = create(&repo, ALICE, "https://example.com").await;

        let result = BookmarkService::update_bookmark(
            &repo,
            &SyntaxUrlValidator,
            BOB,
            original.id,
            payload("not-a-url", "x"),
        )
        .await;
        assert!(matches!(result, Err(BookmarkError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_bookmark_skips_uniqueness_precheck() {
        let repo = MemoryRepository::default();
        let first = create(&repo, ALICE, "https://example.com").await;

        let same = BookmarkService::update_bookmark(
            &repo,
            &SyntaxUrlValidator,
            ALICE,
            first.id,
            payload("https://example.com", "same url, new note"),
        )
        .await
        .unwrap();
        assert_eq!(same.body, "same url, new note");

        let second = create(&repo, ALICE, "https://example.org").await;
        let collision = BookmarkService::update_bookmark(
            &repo,
            &SyntaxUrlValidator,
            ALICE,
            second.id,
            payload("https://example.com", ""),
        )
        .await;
        assert!(matches!(collision, Err(BookmarkError::DuplicateUrl)));
    }
}
