//! Driving port for admin login.
//!
//! In hexagonal terms this is a *driving* port: the HTTP adapter calls it to
//! establish a session without knowing how membership or verification are
//! implemented, which keeps handler tests deterministic.

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::employee::AdminAccount;
use crate::domain::error::Error;

/// Domain use-case port for turning verified credentials into a session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate admin membership and credentials; return the session record.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AdminAccount, Error>;
}
