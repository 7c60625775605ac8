//! # Bookmarks Core
//!
//! Core types and utilities shared by every crate of the Bookmarks API:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page-based pagination parameters and metadata
//!
//! # Example
//!
//! ```ignore
//! use bookmarks_core::errors::AppError;
//! use bookmarks_core::pagination::{PageMeta, PageParams};
//!
//! let error = AppError::bad_request(anyhow::anyhow!("Enter a valid URL"));
//!
//! let params = PageParams::default();
//! let meta = PageMeta::new(params.page(), params.per_page(), 42);
//! ```

pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{PageMeta, PageParams};
