use serde::{Deserialize, Serialize};

/// A single extracurricular offering.
///
/// The activity's name is not part of the record; it is the key under
/// which the record is stored in the directory, mirroring the wire
/// format of `GET /activities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Activity {
    /// Short description of what the activity is about.
    pub description: String,
    /// Human-readable meeting schedule (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    pub schedule: String,
    /// Advisory capacity. Signups are never rejected for exceeding it.
    pub max_participants: u32,
    /// Signed-up participant emails, in signup order. No duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants yet.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replace the participant list, e.g. when seeding the catalog.
    #[must_use]
    pub fn with_participants(mut self, participants: Vec<String>) -> Self {
        self.participants = participants;
        self
    }

    /// Return `true` if `email` is currently signed up.
    #[must_use]
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
