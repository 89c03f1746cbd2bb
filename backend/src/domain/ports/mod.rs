//! Domain ports and supporting types for the hexagonal boundary.

mod admin_access;
mod employee_verifier;
mod hr_directory;
mod image_store;
mod login_service;
mod post_service;
mod post_store;

#[cfg(test)]
pub use admin_access::MockAdminAccess;
pub use admin_access::AdminAccess;
#[cfg(test)]
pub use employee_verifier::MockEmployeeVerifier;
pub use employee_verifier::EmployeeVerifier;
#[cfg(test)]
pub use hr_directory::MockHrDirectory;
pub use hr_directory::{FixtureHrDirectory, HrDirectory, HrDirectoryError};
#[cfg(test)]
pub use image_store::MockImageStore;
pub use image_store::{FixtureImageStore, ImageStore, ImageStoreError, ImageUpload};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use post_service::MockPostService;
pub use post_service::{PostService, PostSubmission};
#[cfg(test)]
pub use post_store::MockPostStore;
pub use post_store::{PostStore, PostStoreError};
