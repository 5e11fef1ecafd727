//! The view of a schedulable item used by conflict detection.

use super::meeting::{MeetingDays, MeetingTime};

/// Something that occupies a weekly time slot on a schedule.
///
/// Intervals are half-open: a block ending at `1445` does not overlap one
/// starting at `1445`.
pub trait TimeBlock {
    /// Unique key of the block; two blocks with the same identity are
    /// duplicates regardless of their meeting times.
    fn identity(&self) -> &str;

    fn weekdays(&self) -> MeetingDays;

    fn start(&self) -> MeetingTime;

    fn end(&self) -> MeetingTime;

    /// Returns `true` when both blocks meet on a shared weekday and their
    /// `[start, end)` intervals intersect.
    fn overlaps<B: TimeBlock + ?Sized>(&self, other: &B) -> bool {
        self.weekdays().shares_day_with(other.weekdays())
            && self.start() < other.end()
            && other.start() < self.end()
    }
}
