//! Callback invoked when a waitlisted entity takes a freed seat.

/// Receives every entity promoted from a waitlist onto a roll.
///
/// The roll calls this after its own state is final, so the hook sees the
/// promoted entity already enrolled. Implementations typically put the
/// section back on the entity's own schedule.
pub trait PromotionHook<T> {
    fn on_promoted(&mut self, entity: &T);
}

impl<T, F> PromotionHook<T> for F
where
    F: FnMut(&T),
{
    fn on_promoted(&mut self, entity: &T) {
        self(entity)
    }
}
