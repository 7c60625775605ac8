//! Request middleware and extractors.
//!
//! - [`auth`]: The `AuthUser` extractor, which authenticates the caller from
//!   an `Authorization: Bearer <token>` header
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn handler(auth_user: AuthUser) -> impl IntoResponse {
//!     let owner = auth_user.user_id;
//!     // ...
//! }
//! ```

pub mod auth;
