use axum::body::Body;
use axum::http::{Request, StatusCode};
use bookmarks::bookmarks_auth::create_access_token;
use bookmarks::bookmarks_config::{CorsConfig, JwtConfig};
use bookmarks::bookmarks_models::UserId;
use bookmarks::router::init_router;
use bookmarks::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState::new(pool, test_jwt_config(), CorsConfig::default());
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: UserId,
    pub username: String,
    pub token: String,
}

/// Inserts a user row directly; accounts are managed outside this service.
pub async fn create_test_user(pool: &PgPool) -> TestUser {
    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("user_{}", &suffix[..12]);
    let email = format!("test-{suffix}@test.com");
    let hashed = bcrypt::hash("testpass123", 4).unwrap();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&username)
    .bind(&email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    let token = create_access_token(id, &test_jwt_config()).unwrap();

    TestUser {
        id: UserId(id),
        username,
        token,
    }
}

/// Sends one request through a fresh router and returns status and JSON body.
pub async fn send(
    pool: &PgPool,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = setup_test_app(pool.clone())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

#[allow(dead_code)]
pub async fn count_bookmarks(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bookmarks")
        .fetch_one(pool)
        .await
        .unwrap()
}
