//! Course roll (enrollment and waitlist) bounds.

use serde::{Deserialize, Serialize};

/// Enrollment bounds shared by every course roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Smallest enrollment capacity a section may have.
    #[serde(default = "default_min_enrollment")]
    pub min_enrollment: usize,
    /// Largest enrollment capacity a section may have.
    #[serde(default = "default_max_enrollment")]
    pub max_enrollment: usize,
    /// Fixed size of each section's waitlist.
    #[serde(default = "default_waitlist_capacity")]
    pub waitlist_capacity: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_enrollment: default_min_enrollment(),
            max_enrollment: default_max_enrollment(),
            waitlist_capacity: default_waitlist_capacity(),
        }
    }
}

impl RosterConfig {
    /// Check whether a capacity lies inside `[min_enrollment, max_enrollment]`.
    pub fn accepts(&self, capacity: usize) -> bool {
        (self.min_enrollment..=self.max_enrollment).contains(&capacity)
    }
}

fn default_min_enrollment() -> usize {
    10
}

fn default_max_enrollment() -> usize {
    250
}

fn default_waitlist_capacity() -> usize {
    10
}
