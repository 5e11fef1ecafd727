//! Student schedule configuration.

use serde::{Deserialize, Serialize};

/// Settings applied to every student schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Title given to new and reset schedules.
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Upper bound for a student's credit ceiling.
    #[serde(default = "default_max_credits")]
    pub max_credits: u32,
    /// Lower bound for a student's credit ceiling.
    #[serde(default = "default_min_credits")]
    pub min_credits: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            max_credits: default_max_credits(),
            min_credits: default_min_credits(),
        }
    }
}

fn default_title() -> String {
    "My Schedule".to_string()
}

fn default_max_credits() -> u32 {
    18
}

fn default_min_credits() -> u32 {
    3
}
