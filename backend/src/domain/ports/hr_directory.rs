//! Driven port for the external HR directory.
//!
//! The domain owns the record shape and the failure taxonomy so verification
//! and admin assignment stay adapter-agnostic. The three failure classes are
//! never collapsed: callers report different user-facing reasons for each.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::employee::{EmployeeId, EmployeeRecord};

/// Errors surfaced while querying the directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HrDirectoryError {
    /// Query succeeded but matched no employee.
    #[error("employee not found in directory")]
    NotFound,
    /// Request exceeded the outbound deadline.
    #[error("directory timeout: {message}")]
    Timeout { message: String },
    /// Non-2xx response or transport failure.
    #[error("directory upstream failure: {message}")]
    Upstream { message: String },
    /// Response body could not be decoded.
    #[error("directory response decode failed: {message}")]
    Decode { message: String },
}

impl HrDirectoryError {
    /// Shorthand constructor for [`HrDirectoryError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Shorthand constructor for [`HrDirectoryError::Upstream`].
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Shorthand constructor for [`HrDirectoryError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for resolving employee identity and contact data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HrDirectory: Send + Sync {
    /// Fetch the full record for one employee in a single round trip.
    async fn lookup(&self, id: &EmployeeId) -> Result<EmployeeRecord, HrDirectoryError>;

    /// Existence-only check requesting just the identifier field.
    async fn exists(&self, id: &EmployeeId) -> Result<bool, HrDirectoryError>;
}

/// In-memory directory used by tests and credential-less dev runs.
#[derive(Debug, Clone, Default)]
pub struct FixtureHrDirectory {
    records: HashMap<EmployeeId, EmployeeRecord>,
}

impl FixtureHrDirectory {
    /// Build an empty fixture directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous entry for the identifier.
    #[must_use]
    pub fn with_record(mut self, id: EmployeeId, record: EmployeeRecord) -> Self {
        self.records.insert(id, record);
        self
    }

    /// Seed directory used when no upstream credentials are configured.
    pub fn seeded() -> Self {
        let record = EmployeeRecord {
            phone_number: Some("555-123-4567".to_owned()),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            department: "Engineering".to_owned(),
            location: "London".to_owned(),
        };
        let mut records = HashMap::new();
        for id in ["9025857", "9025676", "9023422"] {
            if let Ok(id) = EmployeeId::new(id) {
                records.insert(id, record.clone());
            }
        }
        Self { records }
    }
}

#[async_trait]
impl HrDirectory for FixtureHrDirectory {
    async fn lookup(&self, id: &EmployeeId) -> Result<EmployeeRecord, HrDirectoryError> {
        self.records
            .get(id)
            .cloned()
            .ok_or(HrDirectoryError::NotFound)
    }

    async fn exists(&self, id: &EmployeeId) -> Result<bool, HrDirectoryError> {
        Ok(self.records.contains_key(id))
    }
}
