//! Verification credentials: employee identifier plus claimed phone suffix.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::employee::{EmployeeId, EmployeeIdValidationError};

/// Domain error returned when credential values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Employee identifier was missing or blank once trimmed.
    EmptyEmployeeId,
    /// Claimed phone suffix was blank.
    EmptyPhoneSuffix,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmployeeId => write!(f, "employee id must not be empty"),
            Self::EmptyPhoneSuffix => write!(f, "phone suffix must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated credentials used by verification and login.
///
/// ## Invariants
/// - `employee_id` satisfies [`EmployeeId`] validation.
/// - `claimed_suffix` is non-empty. Beyond emptiness the suffix is kept
///   verbatim: the comparison against the on-file number is a raw string
///   match, including the short-number truncation case, so the claim must
///   not be normalised here.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("9025857", "4567").unwrap();
/// assert_eq!(creds.employee_id().as_ref(), "9025857");
/// assert_eq!(creds.claimed_suffix(), "4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    employee_id: EmployeeId,
    claimed_suffix: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw identifier/suffix inputs.
    pub fn try_from_parts(
        employee_id: &str,
        claimed_suffix: &str,
    ) -> Result<Self, LoginValidationError> {
        let employee_id = EmployeeId::new(employee_id).map_err(|err| match err {
            EmployeeIdValidationError::Empty | EmployeeIdValidationError::Untrimmed => {
                LoginValidationError::EmptyEmployeeId
            }
        })?;

        if claimed_suffix.is_empty() {
            return Err(LoginValidationError::EmptyPhoneSuffix);
        }

        Ok(Self {
            employee_id,
            claimed_suffix: Zeroizing::new(claimed_suffix.to_owned()),
        })
    }

    /// Identifier the claim is made for.
    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// Claimed last-four phone digits, verbatim.
    pub fn claimed_suffix(&self) -> &str {
        self.claimed_suffix.as_str()
    }
}
