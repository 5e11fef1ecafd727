//! Identity of the user performing a registration action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use packsched_entity::user::UserRole;

/// Who is acting, passed into every [`RegistrationManager`] operation that
/// changes a schedule.
///
/// [`RegistrationManager`]: crate::registration::RegistrationManager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's id; a student id when `role` is student.
    pub user_id: String,
    pub role: UserRole,
    /// When the action was requested.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Context for `user_id` acting as `role`, stamped with the current time.
    pub fn new(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            request_time: Utc::now(),
        }
    }

    /// Context for a student acting on their own schedule.
    pub fn student(user_id: impl Into<String>) -> Self {
        Self::new(user_id, UserRole::Student)
    }

    /// Whether the actor may change their own enrollment.
    pub fn is_student(&self) -> bool {
        self.role.can_enroll()
    }

    pub fn is_registrar(&self) -> bool {
        matches!(self.role, UserRole::Registrar)
    }
}
