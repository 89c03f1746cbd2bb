//! Driving port for admin-set mutations and listing.

use async_trait::async_trait;

use crate::domain::employee::EmployeeId;
use crate::domain::error::Error;

/// Domain use-case port for managing the admin allow-list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminAccess: Send + Sync {
    /// Grant admin access to `target` on behalf of `requester`.
    ///
    /// Idempotent when `target` is already a member.
    async fn assign(&self, requester: &EmployeeId, target: &EmployeeId) -> Result<(), Error>;

    /// Revoke admin access from `target` on behalf of `requester`.
    ///
    /// Self-removal is always refused.
    async fn remove(&self, requester: &EmployeeId, target: &EmployeeId) -> Result<(), Error>;

    /// Snapshot of the current admin identifiers, sorted for stable output.
    async fn list(&self) -> Result<Vec<EmployeeId>, Error>;
}
