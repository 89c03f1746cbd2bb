//! Employee identity types sourced from the HR directory.
//!
//! Purpose: give the verification and admin flows validated, strongly typed
//! inputs instead of raw strings. `EmployeeProfile` is derived fresh on every
//! successful verification and is never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`EmployeeId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeIdValidationError {
    /// Identifier was missing or blank once trimmed.
    Empty,
    /// Identifier carried surrounding whitespace.
    Untrimmed,
}

impl fmt::Display for EmployeeIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "employee id must not be empty"),
            Self::Untrimmed => write!(f, "employee id must not carry surrounding whitespace"),
        }
    }
}

impl std::error::Error for EmployeeIdValidationError {}

/// Opaque employee identifier issued by the HR directory.
///
/// ## Invariants
/// - Non-empty.
/// - No surrounding whitespace; [`EmployeeId::new`] trims before validating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Validate and construct an [`EmployeeId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, EmployeeIdValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmployeeIdValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = EmployeeIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim() != value {
            return Err(EmployeeIdValidationError::Untrimmed);
        }
        Self::new(value)
    }
}

/// Raw directory record for one employee.
///
/// `phone_number: None` means the directory holds no phone entry at all,
/// which callers must distinguish from `Some("")` (an entry with an empty
/// number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// On-file phone number, unformatted.
    pub phone_number: Option<String>,
    /// Given name, possibly empty.
    pub first_name: String,
    /// Family name, possibly empty.
    pub last_name: String,
    /// Department name.
    pub department: String,
    /// Location name.
    pub location: String,
}

impl EmployeeRecord {
    /// Join first and last name the way the directory renders them:
    /// space-separated, trimmed, empty parts allowed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Public profile summary returned on successful verification.
///
/// Produced fresh from the directory record each time; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    /// Employee identifier the profile was verified for.
    #[schema(value_type = String, example = "9025857")]
    pub emp_id: EmployeeId,
    /// Display name (first and last, trimmed).
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Department name.
    pub department: String,
    /// Location name.
    pub location: String,
}

impl EmployeeProfile {
    /// Assemble a profile from an identifier and its directory record.
    pub fn from_record(emp_id: EmployeeId, record: &EmployeeRecord) -> Self {
        Self {
            emp_id,
            name: record.display_name(),
            department: record.department.clone(),
            location: record.location.clone(),
        }
    }
}

/// Session-held admin identity: who logged in and how to greet them.
///
/// Destroyed on logout or process restart; never written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    /// Identifier the session was established for.
    pub employee_id: EmployeeId,
    /// Display name captured at login time.
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_ids(#[case] raw: &str) {
        assert_eq!(
            EmployeeId::new(raw).expect_err("blank ids must fail"),
            EmployeeIdValidationError::Empty
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let id = EmployeeId::new(" 9025857 ").expect("valid id");
        assert_eq!(id.as_ref(), "9025857");
    }

    #[rstest]
    #[case("Ada", "Lovelace", "Ada Lovelace")]
    #[case("Ada", "", "Ada")]
    #[case("", "Lovelace", "Lovelace")]
    #[case("", "", "")]
    fn display_name_joins_and_trims(
        #[case] first: &str,
        #[case] last: &str,
        #[case] expected: &str,
    ) {
        let record = EmployeeRecord {
            phone_number: None,
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            department: String::new(),
            location: String::new(),
        };
        assert_eq!(record.display_name(), expected);
    }

    #[test]
    fn profile_serialises_camel_case() {
        let record = EmployeeRecord {
            phone_number: Some("555-123-4567".to_owned()),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            department: "Engineering".to_owned(),
            location: "London".to_owned(),
        };
        let profile =
            EmployeeProfile::from_record(EmployeeId::new("9025857").expect("valid id"), &record);
        let value = serde_json::to_value(&profile).expect("profile serialises");
        assert_eq!(value["empId"], "9025857");
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["department"], "Engineering");
        assert_eq!(value["location"], "London");
    }
}
