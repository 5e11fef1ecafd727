//! # packsched-core
//!
//! Core crate for PackScheduler. Contains configuration schemas, typed
//! identifiers, tracing setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other PackScheduler crates.

pub mod config;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
