//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the JSON API: verification, admin management, news posts, and health
//! probes. The document is served at `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::admins::{AdminListResponse, AdminMutationRequest, AdminMutationResponse};
use crate::inbound::http::posts_dto::{NewsDeleteResponse, NewsItemDto, NewsItemResponse};
use crate::inbound::http::verification::VerificationResponse;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "InBrief API",
        description = "Employee verification, admin session management, and the news posts feed."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::verification::verify_employee,
        crate::inbound::http::admins::list_admins,
        crate::inbound::http::admins::assign_admin,
        crate::inbound::http::admins::remove_admin,
        crate::inbound::http::posts::list_news,
        crate::inbound::http::posts::create_news,
        crate::inbound::http::posts::edit_news,
        crate::inbound::http::posts::delete_news,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        VerificationResponse,
        AdminListResponse,
        AdminMutationRequest,
        AdminMutationResponse,
        NewsItemDto,
        NewsItemResponse,
        NewsDeleteResponse,
    )),
    tags(
        (name = "verification", description = "Unauthenticated employee identity checks"),
        (name = "admins", description = "Admin allow-list management"),
        (name = "news", description = "News post lifecycle and feed"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
