//! Sections a faculty member is assigned to teach.

use tracing::debug;

use packsched_core::config::ScheduleConfig;
use packsched_core::result::AppResult;
use packsched_core::types::InstructorId;
use packsched_entity::course::{Course, CourseKey};

use super::student_schedule::Schedule;

/// A teaching schedule: the same duplicate and time-conflict rules as a
/// student [`Schedule`], with every held section assigned to one instructor.
#[derive(Debug, Clone)]
pub struct FacultySchedule {
    faculty_id: InstructorId,
    schedule: Schedule,
}

impl FacultySchedule {
    pub fn new(faculty_id: InstructorId, config: &ScheduleConfig) -> Self {
        Self {
            faculty_id,
            schedule: Schedule::new(config),
        }
    }

    pub fn faculty_id(&self) -> &InstructorId {
        &self.faculty_id
    }

    /// Number of sections assigned.
    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    pub fn contains(&self, key: &CourseKey) -> bool {
        self.schedule.contains(key)
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.schedule.courses()
    }

    /// Whether `course` could be assigned without a duplicate or conflict.
    pub fn can_add(&self, course: &Course) -> bool {
        self.schedule.can_add(course)
    }

    /// Assign `course` to this instructor and add it to the schedule.
    ///
    /// Fails with `DuplicateCourse` or `TimeConflict`, leaving `course`
    /// untouched.
    pub fn add_course(&mut self, course: &mut Course) -> AppResult<()> {
        let mut assigned = course.clone();
        assigned.set_instructor_id(Some(self.faculty_id.clone()));
        self.schedule.add_course(assigned)?;
        course.set_instructor_id(Some(self.faculty_id.clone()));
        debug!(faculty = %self.faculty_id, course = %course.key(), "Section assigned");
        Ok(())
    }

    /// Remove the section with `key`. Returns `false` when it was not here.
    pub fn remove_course(&mut self, key: &CourseKey) -> bool {
        self.schedule.remove_course(key)
    }

    /// Drop every section.
    pub fn reset(&mut self) {
        self.schedule.reset();
    }
}
