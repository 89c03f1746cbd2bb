//! InBrief backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface served at `/api-docs/openapi.json`.
pub use doc::ApiDoc;
/// Request-scoped tracing middleware.
pub use middleware::trace::Trace;
