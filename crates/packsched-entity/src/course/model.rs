//! Course section entity model.

use std::fmt;

use serde::{Deserialize, Serialize};

use packsched_core::error::AppError;
use packsched_core::types::InstructorId;

use super::block::TimeBlock;
use super::meeting::{MeetingDays, MeetingTime};
use super::validator::CourseNameValidator;

/// Smallest number of credit hours for a section.
pub const MIN_CREDITS: u8 = 1;

/// Largest number of credit hours for a section.
pub const MAX_CREDITS: u8 = 5;

/// Catalog identity of a section: course name plus section number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseKey {
    /// Course name, e.g. `CSC216`.
    pub name: String,
    /// Three-digit section number, e.g. `001`.
    pub section: String,
}

impl CourseKey {
    pub fn new(name: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: section.into(),
        }
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.section)
    }
}

/// Input for [`Course::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub title: String,
    pub section: String,
    pub credits: u8,
    /// Assigned instructor, if any.
    #[serde(default)]
    pub instructor_id: Option<String>,
    /// Initial enrollment capacity for the section's roll.
    pub enrollment_cap: usize,
    /// Day letters from `MTWHF`, or `A` for arranged.
    pub meeting_days: String,
    /// Start time as `HHMM`; must be `0` for arranged sections.
    pub start_time: u16,
    /// End time as `HHMM`; must be `0` for arranged sections.
    pub end_time: u16,
}

/// A validated course section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    key: CourseKey,
    title: String,
    credits: u8,
    instructor_id: Option<InstructorId>,
    enrollment_cap: usize,
    meeting_days: MeetingDays,
    start_time: MeetingTime,
    end_time: MeetingTime,
}

impl Course {
    /// Validate every field and build the section.
    pub fn new(input: NewCourse) -> Result<Self, AppError> {
        CourseNameValidator::new().validate(&input.name)?;

        if input.title.trim().is_empty() {
            return Err(AppError::validation("Invalid title"));
        }
        if input.section.len() != 3 || !input.section.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::validation("Invalid section"));
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&input.credits) {
            return Err(AppError::validation("Invalid credits"));
        }
        let instructor_id = input.instructor_id.map(InstructorId::new).transpose()?;
        let meeting_days: MeetingDays = input.meeting_days.parse()?;
        let start_time = MeetingTime::from_hhmm(input.start_time)?;
        let end_time = MeetingTime::from_hhmm(input.end_time)?;

        if meeting_days.is_arranged() {
            if start_time != MeetingTime::MIDNIGHT || end_time != MeetingTime::MIDNIGHT {
                return Err(AppError::validation(
                    "Arranged courses cannot have meeting times",
                ));
            }
        } else if start_time >= end_time {
            return Err(AppError::validation("Start time must be before end time"));
        }

        Ok(Self {
            key: CourseKey::new(input.name, input.section),
            title: input.title,
            credits: input.credits,
            instructor_id,
            enrollment_cap: input.enrollment_cap,
            meeting_days,
            start_time,
            end_time,
        })
    }

    /// Catalog key of this section.
    pub fn key(&self) -> &CourseKey {
        &self.key
    }

    /// Course name, e.g. `CSC216`.
    pub fn name(&self) -> &str {
        &self.key.name
    }

    /// Three-digit section number.
    pub fn section(&self) -> &str {
        &self.key.section
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit hours, between [`MIN_CREDITS`] and [`MAX_CREDITS`].
    pub fn credits(&self) -> u8 {
        self.credits
    }

    /// Instructor teaching the section; `None` until one is assigned.
    pub fn instructor_id(&self) -> Option<&InstructorId> {
        self.instructor_id.as_ref()
    }

    pub fn set_instructor_id(&mut self, instructor_id: Option<InstructorId>) {
        self.instructor_id = instructor_id;
    }

    /// Enrollment capacity requested when the section was created.
    pub fn enrollment_cap(&self) -> usize {
        self.enrollment_cap
    }

    /// Meeting days; empty for arranged sections.
    pub fn meeting_days(&self) -> MeetingDays {
        self.meeting_days
    }

    /// Start of the meeting block. Midnight when arranged.
    pub fn start_time(&self) -> MeetingTime {
        self.start_time
    }

    pub fn end_time(&self) -> MeetingTime {
        self.end_time
    }

    /// Human-readable meeting pattern, e.g. `MW 1:30PM-2:45PM` or `Arranged`.
    pub fn meeting_string(&self) -> String {
        if self.meeting_days.is_arranged() {
            return "Arranged".to_string();
        }
        format!(
            "{} {}-{}",
            self.meeting_days,
            self.start_time.to_standard(),
            self.end_time.to_standard()
        )
    }

    /// Display row for schedule and catalog listings.
    pub fn short_display(&self, open_seats: usize) -> CourseRow {
        CourseRow {
            name: self.key.name.clone(),
            section: self.key.section.clone(),
            title: self.title.clone(),
            meeting: self.meeting_string(),
            open_seats,
        }
    }
}

impl TimeBlock for Course {
    fn identity(&self) -> &str {
        &self.key.name
    }

    fn weekdays(&self) -> MeetingDays {
        self.meeting_days
    }

    fn start(&self) -> MeetingTime {
        self.start_time
    }

    fn end(&self) -> MeetingTime {
        self.end_time
    }
}

/// One row of a schedule or catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRow {
    pub name: String,
    pub section: String,
    pub title: String,
    pub meeting: String,
    pub open_seats: usize,
}
