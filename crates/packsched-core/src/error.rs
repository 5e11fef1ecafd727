//! Unified application error types for PackScheduler.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Every error here is local and
//! synchronous: it describes a caller-side logic or input mistake, never a
//! transient condition worth retrying.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A container is already holding `capacity` elements.
    CapacityExceeded,
    /// A container capacity would drop below its current length.
    InvalidCapacity,
    /// A value falls outside a domain-fixed range (e.g. enrollment bounds).
    InvalidRange,
    /// A roster capacity would drop below the number of enrolled students.
    CapacityBelowOccupancy,
    /// An absent value was offered to a container.
    NullValue,
    /// The value is equal to an element already present.
    DuplicateValue,
    /// The course is already on the schedule.
    DuplicateCourse,
    /// An index lies outside the valid range for the operation.
    IndexOutOfRange,
    /// A dequeue or pop was attempted on an empty collection.
    EmptyCollection,
    /// Both the roll and its waitlist are full.
    RosterFull,
    /// The course meets at the same time as a scheduled course.
    TimeConflict,
    /// The course-name state machine rejected a character.
    InvalidTransition,
    /// Input validation failed.
    Validation,
    /// The requested resource was not found.
    NotFound,
    /// The caller does not have permission to perform the action.
    Authorization,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl ErrorKind {
    /// Return the kind as an upper-case code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CapacityExceeded => "CAPACITY_EXCEEDED",
            Self::InvalidCapacity => "INVALID_CAPACITY",
            Self::InvalidRange => "INVALID_RANGE",
            Self::CapacityBelowOccupancy => "CAPACITY_BELOW_OCCUPANCY",
            Self::NullValue => "NULL_VALUE",
            Self::DuplicateValue => "DUPLICATE_VALUE",
            Self::DuplicateCourse => "DUPLICATE_COURSE",
            Self::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            Self::EmptyCollection => "EMPTY_COLLECTION",
            Self::RosterFull => "ROSTER_FULL",
            Self::TimeConflict => "TIME_CONFLICT",
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::Validation => "VALIDATION",
            Self::NotFound => "NOT_FOUND",
            Self::Authorization => "AUTHORIZATION",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unified application error used throughout PackScheduler.
///
/// Crate-specific errors (such as the course-name validator's
/// transition errors) are mapped into `AppError` using `From` impls and
/// kept as the `source`.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Create a capacity-exceeded error.
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapacityExceeded, message)
    }

    /// Create an invalid-capacity error.
    pub fn invalid_capacity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCapacity, message)
    }

    /// Create an invalid-range error.
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRange, message)
    }

    /// Create a capacity-below-occupancy error.
    pub fn capacity_below_occupancy(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapacityBelowOccupancy, message)
    }

    /// Create a null-value error.
    pub fn null_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NullValue, message)
    }

    /// Create a duplicate-value error.
    pub fn duplicate_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateValue, message)
    }

    /// Create a duplicate-course error.
    pub fn duplicate_course(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateCourse, message)
    }

    /// Create an index-out-of-range error.
    pub fn index_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IndexOutOfRange, message)
    }

    /// Create an empty-collection error.
    pub fn empty_collection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyCollection, message)
    }

    /// Create a roster-full error.
    pub fn roster_full(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RosterFull, message)
    }

    /// Create a time-conflict error.
    pub fn time_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TimeConflict, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
