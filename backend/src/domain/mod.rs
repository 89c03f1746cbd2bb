//! Domain primitives, services, and ports.
//!
//! Purpose: keep every access-control decision (verification, sessions,
//! admin membership, post edit window) transport agnostic. Inbound adapters
//! map these types to HTTP; outbound adapters satisfy the driven ports.

pub mod admin_access;
pub mod admin_set;
pub mod auth;
pub mod employee;
pub mod error;
pub mod login;
pub mod ports;
pub mod post;
pub mod posts_service;
pub mod verification;

pub use self::admin_access::AdminAccessService;
pub use self::admin_set::AdminSet;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::employee::{
    AdminAccount, EmployeeId, EmployeeIdValidationError, EmployeeProfile, EmployeeRecord,
};
pub use self::error::{Error, ErrorCode};
pub use self::login::AdminLoginService;
pub use self::post::{
    Category, CategoryParseError, Post, PostChanges, PostDraft, PostDraftValidationError, PostId,
    EDIT_WINDOW, is_editable,
};
pub use self::posts_service::NewsPostService;
pub use self::verification::{DirectoryVerifier, VerificationError};

/// Convenient result alias for domain use-cases.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn guarded() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
