//! Student entity model.

use serde::{Deserialize, Serialize};

use packsched_core::config::ScheduleConfig;
use packsched_core::error::AppError;
use packsched_core::types::StudentId;

use super::validate_email;

/// Input for [`Student::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Credit ceiling; `None` uses the configured maximum.
    pub max_credits: Option<u32>,
}

/// A student who can hold seats in course rolls.
///
/// Two students are the same student when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    email: String,
    max_credits: u32,
}

impl Student {
    /// Validate every field and build the student.
    pub fn new(input: NewStudent, config: &ScheduleConfig) -> Result<Self, AppError> {
        let id = StudentId::new(input.id)?;
        if input.first_name.trim().is_empty() {
            return Err(AppError::validation("Invalid first name"));
        }
        if input.last_name.trim().is_empty() {
            return Err(AppError::validation("Invalid last name"));
        }
        validate_email(&input.email)?;

        let mut student = Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            max_credits: config.max_credits,
        };
        if let Some(max_credits) = input.max_credits {
            student.set_max_credits(max_credits, config)?;
        }
        Ok(student)
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn max_credits(&self) -> u32 {
        self.max_credits
    }

    /// Change the credit ceiling within the configured bounds.
    pub fn set_max_credits(
        &mut self,
        max_credits: u32,
        config: &ScheduleConfig,
    ) -> Result<(), AppError> {
        if !(config.min_credits..=config.max_credits).contains(&max_credits) {
            return Err(AppError::invalid_range(format!(
                "Invalid max credits {max_credits}; expected {}..={}",
                config.min_credits, config.max_credits
            )));
        }
        self.max_credits = max_credits;
        Ok(())
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

#[cfg(test)]
mod tests {
    use super::*;
    use packsched_core::error::ErrorKind;

    fn input(id: &str) -> NewStudent {
        NewStudent {
            id: id.to_string(),
            first_name: "Demetrius".to_string(),
            last_name: "Austin".to_string(),
            email: "daustin@ncsu.edu".to_string(),
            max_credits: None,
        }
    }

    #[test]
    fn test_defaults_to_configured_max_credits() {
        let student = Student::new(input("daustin"), &ScheduleConfig::default()).unwrap();
        assert_eq!(student.max_credits(), 18);
        assert_eq!(student.id().as_str(), "daustin");
    }

    #[test]
    fn test_max_credits_bounds() {
        let config = ScheduleConfig::default();
        let mut low = input("a");
        low.max_credits = Some(2);
        let err = Student::new(low, &config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRange);

        let mut ok = input("b");
        ok.max_credits = Some(12);
        assert_eq!(Student::new(ok, &config).unwrap().max_credits(), 12);
    }

    #[test]
    fn test_email_rules() {
        let config = ScheduleConfig::default();
        for email in ["plain", "no-dot@host", "first.last@host"] {
            let mut bad = input("c");
            bad.email = email.to_string();
            assert!(Student::new(bad, &config).is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_identity_is_id() {
        let config = ScheduleConfig::default();
        let a = Student::new(input("same"), &config).unwrap();
        let mut other = input("same");
        other.first_name = "Someone".to_string();
        let b = Student::new(other, &config).unwrap();
        assert_eq!(a, b);
    }
}
