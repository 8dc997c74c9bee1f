//! OpenAPI document and the Swagger UI that serves it.
//!
//! Every users operation is registered here from its `#[utoipa::path]`
//! annotation. The bearer scheme is declared for documentation only; no
//! handler checks a token.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::DocsConfig;
use crate::error::ErrorResponse;
use crate::users::dto::{
    CreateUserRequest, UpdateUserRequest, UserData, UserResponse, UsersData, UsersResponse,
};
use crate::users::repo_types::User;

pub const BEARER_SCHEME: &str = "access-token";

struct BearerAddon;

impl Modify for BearerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Bearer token sent in the Authorization header."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAddon),
    info(
        title = "User Directory API",
        description = "In-memory users resource with generated API documentation.",
        version = "1.0"
    ),
    paths(
        crate::users::handlers::create_user,
        crate::users::handlers::list_users,
        crate::users::handlers::get_user,
        crate::users::handlers::update_user,
        crate::users::handlers::remove_user,
    ),
    components(schemas(
        User,
        UserData,
        UsersData,
        UserResponse,
        UsersResponse,
        CreateUserRequest,
        UpdateUserRequest,
        ErrorResponse,
    )),
    tags((name = "Users", description = "Operations on the user directory"))
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Swagger UI at `cfg.ui_path`, document JSON at `cfg.spec_path`.
pub fn docs_router(cfg: &DocsConfig) -> Router {
    SwaggerUi::new(cfg.ui_path.clone())
        .url(cfg.spec_path.clone(), openapi())
        .into()
}
