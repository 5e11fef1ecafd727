//! Students, faculty and user roles.

pub mod faculty;
pub mod role;
pub mod student;

pub use faculty::{Faculty, NewFaculty};
pub use role::UserRole;
pub use student::{NewStudent, Student};

use packsched_core::error::AppError;

/// An email needs an `@` somewhere before its last `.`.
fn validate_email(email: &str) -> Result<(), AppError> {
    let at = email.find('@');
    let dot = email.rfind('.');
    match (at, dot) {
        (Some(at), Some(dot)) if at < dot => Ok(()),
        _ => Err(AppError::validation("Invalid email")),
    }
}
