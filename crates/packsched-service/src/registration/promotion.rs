//! Keeps a promoted student's schedule in step with the roll.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use packsched_core::types::StudentId;
use packsched_entity::course::Course;

use super::manager::Enrollee;
use crate::roll::PromotionHook;

/// Puts `course` on the schedule of every student promoted into it.
pub(super) struct SeatPromotion<'a> {
    pub course: &'a Course,
    pub students: &'a mut BTreeMap<StudentId, Enrollee>,
}

impl PromotionHook<StudentId> for SeatPromotion<'_> {
    fn on_promoted(&mut self, student_id: &StudentId) {
        let Some(enrollee) = self.students.get_mut(student_id) else {
            warn!(
                student = %student_id,
                course = %self.course.key(),
                "Promoted student is not registered"
            );
            return;
        };
        match enrollee.schedule.ensure_course(self.course.clone()) {
            Ok(true) => info!(
                student = %student_id,
                course = %self.course.key(),
                "Section added to promoted student's schedule"
            ),
            Ok(false) => debug!(
                student = %student_id,
                course = %self.course.key(),
                "Promoted student already holds the section"
            ),
            Err(err) => warn!(
                student = %student_id,
                course = %self.course.key(),
                error = %err,
                "Could not place promoted section on schedule"
            ),
        }
    }
}
