//! Thread-safe in-memory activity directory.
//!
//! The directory is the single shared store behind every request
//! handler. The activity set is fixed at construction; only the
//! participant lists mutate.

use std::sync::RwLock;

use indexmap::IndexMap;

use crate::activity::Activity;
use crate::catalog::seed_catalog;
use crate::error::DirectoryError;

/// Shared registry of activities, keyed by name.
///
/// A single `RwLock` guards the whole map, so the membership check
/// and the mutation of a signup happen under one write guard and the
/// no-duplicate invariant holds under concurrent requests.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityDirectory {
    /// Create a directory over an explicit activity set.
    #[must_use]
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Create a directory seeded with the standard catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    /// Return a snapshot of every activity, in catalog order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread
    /// panicked while holding the lock).
    #[must_use]
    pub fn snapshot(&self) -> IndexMap<String, Activity> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.activities
            .read()
            .expect("directory read lock poisoned")
            .clone()
    }

    /// Append `email` to the activity's participant list.
    ///
    /// Capacity (`max_participants`) is advisory and never checked.
    ///
    /// # Errors
    /// [`DirectoryError::UnknownActivity`] if the activity does not
    /// exist, [`DirectoryError::AlreadyRegistered`] if the email is
    /// already signed up.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn sign_up(&self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut activities = self
            .activities
            .write()
            .expect("directory write lock poisoned");

        let record = activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::UnknownActivity {
                name: activity.to_owned(),
            })?;

        if record.is_registered(email) {
            return Err(DirectoryError::AlreadyRegistered {
                email: email.to_owned(),
                activity: activity.to_owned(),
            });
        }

        record.participants.push(email.to_owned());
        Ok(())
    }

    /// Remove `email` from the activity's participant list.
    ///
    /// Removes exactly one occurrence and preserves the order of the
    /// remaining participants.
    ///
    /// # Errors
    /// [`DirectoryError::UnknownActivity`] if the activity does not
    /// exist, [`DirectoryError::NotRegistered`] if the email is not
    /// signed up.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut activities = self
            .activities
            .write()
            .expect("directory write lock poisoned");

        let record = activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::UnknownActivity {
                name: activity.to_owned(),
            })?;

        let position = record
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::NotRegistered {
                email: email.to_owned(),
                activity: activity.to_owned(),
            })?;

        record.participants.remove(position);
        Ok(())
    }
}
