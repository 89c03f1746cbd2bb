//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AdminAccess, EmployeeVerifier, LoginService, PostService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Unauthenticated phone-suffix verification.
    pub verifier: Arc<dyn EmployeeVerifier>,
    /// Admin login (allow-list gate plus verification).
    pub login: Arc<dyn LoginService>,
    /// Admin allow-list management.
    pub admins: Arc<dyn AdminAccess>,
    /// Post lifecycle use-cases.
    pub posts: Arc<dyn PostService>,
}
