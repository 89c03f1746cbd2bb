//! Admin login: allow-list gate followed by identity verification.
//!
//! Membership is checked before the directory is consulted so a login by a
//! non-admin never reaches the upstream at all. Credential failures keep
//! their specific reason so the login page can show it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::admin_set::AdminSet;
use crate::domain::auth::LoginCredentials;
use crate::domain::employee::AdminAccount;
use crate::domain::error::Error;
use crate::domain::ports::{EmployeeVerifier, HrDirectoryError, LoginService};
use crate::domain::verification::VerificationError;

/// Refusal reason for identifiers outside the admin set.
const LOGIN_REFUSED: &str = "Unauthorized access";

/// Session Authority: authenticates admins against the allow-list and the
/// shared phone-suffix verifier.
#[derive(Clone)]
pub struct AdminLoginService<V> {
    verifier: Arc<V>,
    admins: Arc<AdminSet>,
}

impl<V> AdminLoginService<V> {
    /// Build the service over the given verifier and admin set.
    pub fn new(verifier: Arc<V>, admins: Arc<AdminSet>) -> Self {
        Self { verifier, admins }
    }

    fn map_verification_error(err: VerificationError) -> Error {
        match err {
            VerificationError::Directory(HrDirectoryError::Timeout { .. }) => {
                Error::upstream_timeout(err.public_reason())
            }
            VerificationError::Directory(
                HrDirectoryError::Upstream { .. } | HrDirectoryError::Decode { .. },
            ) => Error::upstream(err.public_reason()),
            VerificationError::EmployeeNotFound
            | VerificationError::Directory(HrDirectoryError::NotFound)
            | VerificationError::PhoneNumberMissing
            | VerificationError::PhoneNumberEmpty
            | VerificationError::SuffixMismatch => Error::unauthorized(err.public_reason()),
        }
    }
}

#[async_trait]
impl<V> LoginService for AdminLoginService<V>
where
    V: EmployeeVerifier,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<AdminAccount, Error> {
        let employee_id = credentials.employee_id();
        if !self.admins.contains(employee_id) {
            warn!(employee_id = %employee_id, "login refused: not an admin");
            return Err(Error::unauthorized(LOGIN_REFUSED));
        }

        let profile = self
            .verifier
            .verify(credentials)
            .await
            .map_err(|err| {
                warn!(employee_id = %employee_id, error = %err, "login verification failed");
                Self::map_verification_error(err)
            })?;

        info!(employee_id = %employee_id, "admin login succeeded");
        Ok(AdminAccount {
            employee_id: profile.emp_id,
            display_name: profile.name,
        })
    }
}
