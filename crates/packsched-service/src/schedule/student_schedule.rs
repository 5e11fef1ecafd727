//! A student's weekly schedule of course sections.

use tracing::debug;

use packsched_collections::{ArrayList, BoundedList};
use packsched_core::config::ScheduleConfig;
use packsched_core::error::AppError;
use packsched_core::result::AppResult;
use packsched_entity::course::{Course, CourseKey, CourseRow};

use super::conflict::can_place;

/// Courses held by one student, free of duplicates and time conflicts.
#[derive(Debug, Clone)]
pub struct Schedule {
    title: String,
    default_title: String,
    courses: ArrayList<Course>,
}

impl Schedule {
    /// Empty schedule titled with the configured default.
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            title: config.default_title.clone(),
            default_title: config.default_title.clone(),
            courses: ArrayList::unbounded(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the schedule; blank titles are rejected.
    pub fn set_title(&mut self, title: impl Into<String>) -> AppResult<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty."));
        }
        self.title = title;
        Ok(())
    }

    /// Number of courses on the schedule.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether a section with `key` is on the schedule.
    pub fn contains(&self, key: &CourseKey) -> bool {
        self.courses.iter().any(|course| course.key() == key)
    }

    /// Courses in the order they were added.
    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter()
    }

    /// Add `course`, failing with `DuplicateCourse` or `TimeConflict`.
    pub fn add_course(&mut self, course: Course) -> AppResult<()> {
        can_place(self.courses.iter(), &course)?;
        debug!(course = %course.key(), "Course added to schedule");
        self.courses.push_back(course)
    }

    /// Add `course` unless a section with the same key is already here.
    ///
    /// Returns whether the schedule changed.
    pub fn ensure_course(&mut self, course: Course) -> AppResult<bool> {
        if self.contains(course.key()) {
            return Ok(false);
        }
        self.add_course(course)?;
        Ok(true)
    }

    /// Remove the section with `key`. Returns `false` when it was not here.
    pub fn remove_course(&mut self, key: &CourseKey) -> bool {
        let Some(index) = self.courses.iter().position(|course| course.key() == key) else {
            return false;
        };
        match self.courses.remove_at(index) {
            Ok(_) => {
                debug!(course = %key, "Course removed from schedule");
                true
            }
            Err(_) => false,
        }
    }

    /// Whether `course` could be added without a duplicate or conflict.
    pub fn can_add(&self, course: &Course) -> bool {
        can_place(self.courses.iter(), course).is_ok()
    }

    /// [`Schedule::can_add`] plus a ceiling on total credit hours.
    pub fn can_add_within_credits(&self, course: &Course, max_credits: u32) -> bool {
        self.can_add(course) && self.total_credits() + u32::from(course.credits()) <= max_credits
    }

    /// Sum of credit hours over every course on the schedule.
    pub fn total_credits(&self) -> u32 {
        self.courses
            .iter()
            .map(|course| u32::from(course.credits()))
            .sum()
    }

    /// Display rows for every course, with open seats looked up per section.
    ///
    /// Each call starts a fresh listing.
    pub fn list_courses<'a, F>(&'a self, open_seats: F) -> impl Iterator<Item = CourseRow> + 'a
    where
        F: Fn(&CourseKey) -> usize + 'a,
    {
        self.courses
            .iter()
            .map(move |course| course.short_display(open_seats(course.key())))
    }

    /// Drop every course and restore the default title.
    pub fn reset(&mut self) {
        self.courses = ArrayList::unbounded();
        self.title = self.default_title.clone();
    }
}
