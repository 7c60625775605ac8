pub mod bookmarks;
pub mod health;
