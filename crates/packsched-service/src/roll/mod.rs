//! Per-section enrollment roll and waitlist.

pub mod course_roll;
pub mod promotion;

pub use course_roll::{CourseRoll, DropOutcome, EnrollmentStatus, Removal};
pub use promotion::PromotionHook;
