use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::bookmarks::controller::ErrorResponse;
use crate::modules::health::HealthResponse;
use bookmarks_core::{PageMeta, PageParams};
use bookmarks_models::{Bookmark, BookmarkPayload, PaginatedBookmarksResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health_check,
        crate::modules::bookmarks::controller::create_bookmark,
        crate::modules::bookmarks::controller::list_bookmarks,
        crate::modules::bookmarks::controller::get_bookmark,
        crate::modules::bookmarks::controller::update_bookmark,
    ),
    components(
        schemas(
            Bookmark,
            BookmarkPayload,
            PaginatedBookmarksResponse,
            PageMeta,
            PageParams,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Bookmarks", description = "Bookmark storage scoped to the authenticated user"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Bookmarks API",
        version = "0.1.0",
        description = "Store URLs with notes and page through them. Requests authenticate with a JWT bearer token.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
