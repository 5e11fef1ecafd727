//! Placement checks for time blocks on a schedule.

use packsched_core::error::AppError;
use packsched_core::result::AppResult;
use packsched_entity::course::TimeBlock;

/// Message reported when a candidate overlaps an existing block.
pub const CONFLICT_MESSAGE: &str = "The course cannot be added due to a conflict.";

/// Check whether `candidate` can join `existing`.
///
/// Blocks are examined in order. The first block sharing the candidate's
/// identity fails with `DuplicateCourse`; the first block overlapping it in
/// time fails with `TimeConflict`. Neither input is modified.
pub fn can_place<'a, B, C>(
    existing: impl IntoIterator<Item = &'a B>,
    candidate: &C,
) -> AppResult<()>
where
    B: TimeBlock + 'a,
    C: TimeBlock + ?Sized,
{
    for block in existing {
        if block.identity() == candidate.identity() {
            return Err(AppError::duplicate_course(format!(
                "You are already enrolled in {}",
                candidate.identity()
            )));
        }
        if block.overlaps(candidate) {
            return Err(AppError::time_conflict(CONFLICT_MESSAGE));
        }
    }
    Ok(())
}

/// Boolean form of [`can_place`].
pub fn fits<'a, B, C>(existing: impl IntoIterator<Item = &'a B>, candidate: &C) -> bool
where
    B: TimeBlock + 'a,
    C: TimeBlock + ?Sized,
{
    can_place(existing, candidate).is_ok()
}
