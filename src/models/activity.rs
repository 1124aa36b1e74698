use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity name -> record, as returned by `GET /activities`.
pub type ActivityMap = BTreeMap<String, ActivityRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    // Insertion order is kept for display; emails are unique.
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Spots left before `max_participants` is reached. Can be negative
    /// because capacity is not enforced on signup.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}
