//! Student and faculty schedules, and time-conflict detection.

pub mod conflict;
pub mod faculty_schedule;
pub mod student_schedule;

pub use conflict::{can_place, fits};
pub use faculty_schedule::FacultySchedule;
pub use student_schedule::Schedule;
