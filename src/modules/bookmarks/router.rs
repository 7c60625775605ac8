use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_bookmark, get_bookmark, list_bookmarks, update_bookmark};

pub fn init_bookmarks_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_bookmark).get(list_bookmarks))
        .route("/{id}", get(get_bookmark).put(update_bookmark))
}
