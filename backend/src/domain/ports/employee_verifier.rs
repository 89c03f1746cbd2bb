//! Driving port for employee identity verification.
//!
//! Called by two inbound surfaces with identical comparison semantics: the
//! unauthenticated verification API and the admin login flow.

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::employee::EmployeeProfile;
use crate::domain::verification::VerificationError;

/// Domain use-case port for confirming a phone-suffix claim.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeVerifier: Send + Sync {
    /// Decide verified/not-verified and assemble the profile on success.
    async fn verify(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<EmployeeProfile, VerificationError>;
}
