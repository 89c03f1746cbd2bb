//! Admin-set management: granting, revoking, and listing admin access.
//!
//! Grants are gated by an existence check against the HR directory so an
//! admin cannot allow-list an identifier the organisation does not know.
//! The directory call runs before the set lock is touched.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::admin_set::AdminSet;
use crate::domain::employee::EmployeeId;
use crate::domain::error::Error;
use crate::domain::ports::{AdminAccess, HrDirectory, HrDirectoryError};

/// Admin Set Manager backed by a [`HrDirectory`] port and a shared [`AdminSet`].
#[derive(Clone)]
pub struct AdminAccessService<D> {
    directory: Arc<D>,
    admins: Arc<AdminSet>,
}

impl<D> AdminAccessService<D> {
    /// Build the service over the given directory and admin set.
    pub fn new(directory: Arc<D>, admins: Arc<AdminSet>) -> Self {
        Self { directory, admins }
    }

    fn map_existence_error(err: HrDirectoryError) -> Error {
        match err {
            HrDirectoryError::NotFound => Error::not_found("Employee not found"),
            HrDirectoryError::Timeout { .. } => Error::upstream_timeout("Request timed out"),
            HrDirectoryError::Upstream { .. } | HrDirectoryError::Decode { .. } => {
                Error::upstream("Failed to verify employee")
            }
        }
    }
}

#[async_trait]
impl<D> AdminAccess for AdminAccessService<D>
where
    D: HrDirectory,
{
    async fn assign(&self, requester: &EmployeeId, target: &EmployeeId) -> Result<(), Error> {
        if !self.admins.contains(requester) {
            return Err(Error::forbidden("Unauthorized to assign admin access"));
        }

        let exists = self
            .directory
            .exists(target)
            .await
            .map_err(Self::map_existence_error)?;
        if !exists {
            return Err(Error::not_found("Employee not found"));
        }

        // Idempotent: re-granting an existing admin is not an error.
        let inserted = self.admins.insert(target.clone());
        if inserted {
            info!(
                employee_id = %target,
                granted_by = %requester,
                at = %Utc::now().format("%Y-%m-%d %H:%M:%S"),
                "admin access granted"
            );
        }
        Ok(())
    }

    async fn remove(&self, requester: &EmployeeId, target: &EmployeeId) -> Result<(), Error> {
        if !self.admins.contains(requester) {
            return Err(Error::forbidden("Unauthorized to remove admin access"));
        }
        if requester == target {
            return Err(Error::forbidden("Cannot remove your own admin access"));
        }
        if !self.admins.remove(target) {
            return Err(Error::not_found("Employee is not an admin"));
        }
        info!(employee_id = %target, removed_by = %requester, "admin access removed");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<EmployeeId>, Error> {
        Ok(self.admins.snapshot())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for grant/revoke rules and the error taxonomy.

    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::ports::MockHrDirectory;
    use rstest::rstest;

    fn id(raw: &str) -> EmployeeId {
        EmployeeId::new(raw).expect("valid id")
    }

    fn service_with(
        directory: MockHrDirectory,
    ) -> (AdminAccessService<MockHrDirectory>, Arc<AdminSet>) {
        let admins = Arc::new(AdminSet::seeded([id("9025857"), id("9025676")]));
        (
            AdminAccessService::new(Arc::new(directory), Arc::clone(&admins)),
            admins,
        )
    }

    #[tokio::test]
    async fn assign_inserts_after_existence_check() {
        let mut directory = MockHrDirectory::new();
        directory.expect_exists().returning(|_| Ok(true));
        let (service, admins) = service_with(directory);

        service
            .assign(&id("9025857"), &id("1234567"))
            .await
            .expect("grant succeeds");
        assert!(admins.contains(&id("1234567")));
    }

    #[tokio::test]
    async fn assign_is_idempotent() {
        let mut directory = MockHrDirectory::new();
        directory.expect_exists().returning(|_| Ok(true));
        let (service, admins) = service_with(directory);

        service.assign(&id("9025857"), &id("1234567")).await.expect("first grant");
        service.assign(&id("9025857"), &id("1234567")).await.expect("second grant");
        assert_eq!(admins.snapshot().len(), 3);
    }

    #[tokio::test]
    async fn assign_requires_admin_requester() {
        let directory = MockHrDirectory::new(); // no directory call expected
        let (service, admins) = service_with(directory);

        let err = service
            .assign(&id("0000000"), &id("1234567"))
            .await
            .expect_err("non-admin requester");
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert!(!admins.contains(&id("1234567")));
    }

    #[rstest]
    #[case(HrDirectoryError::NotFound, ErrorCode::NotFound, "Employee not found")]
    #[case(
        HrDirectoryError::timeout("deadline"),
        ErrorCode::UpstreamTimeout,
        "Request timed out"
    )]
    #[case(
        HrDirectoryError::upstream("status 500"),
        ErrorCode::UpstreamError,
        "Failed to verify employee"
    )]
    #[tokio::test]
    async fn assign_surfaces_distinct_directory_failures(
        #[case] failure: HrDirectoryError,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let mut directory = MockHrDirectory::new();
        directory
            .expect_exists()
            .return_once(move |_| Err(failure));
        let (service, admins) = service_with(directory);

        let err = service
            .assign(&id("9025857"), &id("1234567"))
            .await
            .expect_err("directory failure");
        assert_eq!(err.code(), code);
        assert_eq!(err.message(), message);
        assert!(!admins.contains(&id("1234567")), "set must be unchanged");
    }

    #[tokio::test]
    async fn assign_rejects_unknown_employee() {
        let mut directory = MockHrDirectory::new();
        directory.expect_exists().returning(|_| Ok(false));
        let (service, admins) = service_with(directory);

        let err = service
            .assign(&id("9025857"), &id("1234567"))
            .await
            .expect_err("unknown employee");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(!admins.contains(&id("1234567")));
    }

    #[tokio::test]
    async fn self_removal_is_always_refused() {
        let (service, admins) = service_with(MockHrDirectory::new());
        // Even when down to a single admin.
        admins.remove(&id("9025676"));

        let err = service
            .remove(&id("9025857"), &id("9025857"))
            .await
            .expect_err("self-removal");
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(err.message(), "Cannot remove your own admin access");
        assert!(admins.contains(&id("9025857")));
    }

    #[tokio::test]
    async fn removing_a_non_member_reports_not_an_admin() {
        let (service, _admins) = service_with(MockHrDirectory::new());
        let err = service
            .remove(&id("9025857"), &id("1234567"))
            .await
            .expect_err("non-member");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Employee is not an admin");
    }

    #[tokio::test]
    async fn remove_succeeds_for_other_members() {
        let (service, admins) = service_with(MockHrDirectory::new());
        service
            .remove(&id("9025857"), &id("9025676"))
            .await
            .expect("removal succeeds");
        assert!(!admins.contains(&id("9025676")));
    }

    #[tokio::test]
    async fn list_returns_sorted_snapshot() {
        let (service, _admins) = service_with(MockHrDirectory::new());
        let members: Vec<String> = service
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(members, vec!["9025676", "9025857"]);
    }
}
