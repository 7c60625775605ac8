use std::sync::Arc;

use anyhow::Context;
use bookmarks_config::{CorsConfig, DatabaseConfig, JwtConfig};
use bookmarks_db::{init_db_pool, run_migrations};
use sqlx::PgPool;

use crate::modules::bookmarks::{
    BookmarkRepository, PgBookmarkRepository, SyntaxUrlValidator, UrlValidator,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub bookmarks: Arc<dyn BookmarkRepository>,
    pub url_validator: Arc<dyn UrlValidator>,
}

impl AppState {
    /// Wires the Postgres repository and the default URL validator around `db`.
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            bookmarks: Arc::new(PgBookmarkRepository::new(db.clone())),
            url_validator: Arc::new(SyntaxUrlValidator),
            db,
            jwt_config,
            cors_config,
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db_config = DatabaseConfig::from_env()?;
    let db = init_db_pool(&db_config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    Ok(AppState::new(
        db,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
