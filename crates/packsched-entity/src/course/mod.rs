//! Course sections, meeting times, and course name validation.

pub mod block;
pub mod meeting;
pub mod model;
pub mod validator;

pub use block::TimeBlock;
pub use meeting::{MeetingDays, MeetingTime};
pub use model::{Course, CourseKey, CourseRow, NewCourse};
pub use validator::{CourseNameValidator, TransitionError, ValidatorState};
