//! Faculty entity model.

use serde::{Deserialize, Serialize};

use packsched_core::error::AppError;
use packsched_core::types::InstructorId;

use super::validate_email;

/// Fewest sections a faculty member may be assigned before overload.
pub const MIN_COURSES: usize = 1;

/// Most sections a faculty member may be assigned before overload.
pub const MAX_COURSES: usize = 3;

/// Input for [`Faculty::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFaculty {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Teaching load, between [`MIN_COURSES`] and [`MAX_COURSES`].
    pub max_courses: usize,
}

/// A faculty member who can be assigned to teach sections.
///
/// Equality compares every field, teaching load included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    id: InstructorId,
    first_name: String,
    last_name: String,
    email: String,
    max_courses: usize,
}

impl Faculty {
    /// Validate every field and build the faculty member.
    pub fn new(input: NewFaculty) -> Result<Self, AppError> {
        let id = InstructorId::new(input.id)?;
        if input.first_name.trim().is_empty() {
            return Err(AppError::validation("Invalid first name"));
        }
        if input.last_name.trim().is_empty() {
            return Err(AppError::validation("Invalid last name"));
        }
        validate_email(&input.email)?;

        let mut faculty = Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            max_courses: MIN_COURSES,
        };
        faculty.set_max_courses(input.max_courses)?;
        Ok(faculty)
    }

    pub fn id(&self) -> &InstructorId {
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

    /// Sections this faculty member can teach without being overloaded.
    pub fn max_courses(&self) -> usize {
        self.max_courses
    }

    /// Change the teaching load; fails with `InvalidRange` outside
    /// [`MIN_COURSES`]..=[`MAX_COURSES`].
    pub fn set_max_courses(&mut self, max_courses: usize) -> Result<(), AppError> {
        if !(MIN_COURSES..=MAX_COURSES).contains(&max_courses) {
            return Err(AppError::invalid_range("Invalid max courses"));
        }
        self.max_courses = max_courses;
        Ok(())
    }

    /// Whether `scheduled_courses` exceeds the teaching load.
    pub fn is_overloaded(&self, scheduled_courses: usize) -> bool {
        scheduled_courses > self.max_courses
    }
}
