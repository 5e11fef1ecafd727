//! # PackScheduler
//!
//! Course section seat allocation with FIFO waitlists, schedule conflict
//! checks, and a course-name validator, built on bounded list, queue and
//! stack collections.
//!
//! The member crates are re-exported here so applications can depend on
//! this one package:
//!
//! - [`packsched_core`]: errors, configuration, tracing setup, typed ids
//! - [`packsched_collections`]: bounded lists, queues and stacks
//! - [`packsched_entity`]: courses, meeting times, students, name validation
//! - [`packsched_service`]: rolls, schedules and the registration manager

pub use packsched_collections;
pub use packsched_core;
pub use packsched_entity;
pub use packsched_service;

pub use packsched_core::config::AppConfig;
pub use packsched_core::{AppError, AppResult, ErrorKind};
pub use packsched_service::{CourseRoll, RegistrationManager, RequestContext, Schedule};
