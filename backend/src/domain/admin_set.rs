//! Mutable allow-list of admin employee identifiers.
//!
//! Process-wide shared state, injected explicitly rather than reached as a
//! global. No persistence: a restart reverts to the seed list, which also
//! invalidates every session. One mutual-exclusion guard around the set is
//! enough; the outbound directory call never happens under this lock.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use crate::domain::employee::EmployeeId;

/// Seeded, lock-guarded set of identifiers permitted to hold a session.
#[derive(Debug, Default)]
pub struct AdminSet {
    inner: RwLock<HashSet<EmployeeId>>,
}

impl AdminSet {
    /// Build a set from the seed identifiers supplied by configuration.
    pub fn seeded(seed: impl IntoIterator<Item = EmployeeId>) -> Self {
        Self {
            inner: RwLock::new(seed.into_iter().collect()),
        }
    }

    /// Whether the identifier currently holds admin access.
    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.read().contains(id)
    }

    /// Insert an identifier; returns `false` when it was already present.
    pub fn insert(&self, id: EmployeeId) -> bool {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id)
    }

    /// Remove an identifier; returns `false` when it was not a member.
    pub fn remove(&self, id: &EmployeeId) -> bool {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Sorted snapshot of the current members.
    pub fn snapshot(&self) -> Vec<EmployeeId> {
        let mut members: Vec<EmployeeId> = self.read().iter().cloned().collect();
        members.sort();
        members
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashSet<EmployeeId>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}
