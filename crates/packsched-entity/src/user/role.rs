//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles that can act on the registration system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Enrolls in and drops sections on their own schedule.
    Student,
    /// Teaches sections.
    Faculty,
    /// Administers the catalog and faculty assignments.
    Registrar,
}

impl UserRole {
    /// Check if this role may change its own enrollment.
    pub fn can_enroll(&self) -> bool {
        matches!(self, Self::Student)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Registrar => "registrar",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = packsched_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "registrar" => Ok(Self::Registrar),
            _ => Err(packsched_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: student, faculty, registrar"
            ))),
        }
    }
}
