//! # packsched-service
//!
//! Stateful registration logic for PackScheduler: the per-section
//! [`CourseRoll`] with its waitlist, the per-student [`Schedule`] guarded by
//! conflict detection, and the [`RegistrationManager`] that keeps both sides
//! consistent.
//!
//! Everything here is synchronous and assumes a single caller at a time.
//! Callers sharing a manager across threads must serialize access
//! themselves, e.g. with one mutex per manager.

pub mod context;
pub mod registration;
pub mod roll;
pub mod schedule;

pub use context::RequestContext;
pub use registration::RegistrationManager;
pub use roll::{CourseRoll, DropOutcome, EnrollmentStatus, PromotionHook, Removal};
pub use schedule::{FacultySchedule, Schedule, can_place, fits};
