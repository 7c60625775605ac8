//! # Bookmarks Auth
//!
//! Token types and JWT utilities backing the API's authenticator.
//!
//! Tokens are issued by the account service; this crate only needs to verify
//! them and read the caller's identity from the `sub` claim. Token creation is
//! kept for tooling and tests.
//!
//! # Example
//!
//! ```ignore
//! use bookmarks_auth::{create_access_token, verify_token};
//! use bookmarks_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = create_access_token(42, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "42");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
