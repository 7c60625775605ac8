//! Strongly-typed ID newtypes for domain entities.
//!
//! Both tables use `BIGSERIAL` keys. Wrapping them prevents passing a
//! `UserId` where a `BookmarkId` is expected, which matters on every
//! ownership-scoped query:
//!
//! ```ignore
//! fn find(owner: UserId, id: BookmarkId) { /* ... */ }
//!
//! find(UserId(1), BookmarkId(9));    // OK
//! // find(BookmarkId(9), UserId(1)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Defines an `i64` newtype that is transparent to SQLx and serde.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize, ToSchema, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        #[schema(value_type = i64)]
        pub struct $name(pub i64);

        impl $name {
            /// Get the inner integer value.
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a row in `users`.
    UserId
);

define_id!(
    /// Identifier of a row in `bookmarks`.
    BookmarkId
);
