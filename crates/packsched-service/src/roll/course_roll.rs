//! Enrollment roll with a FIFO waitlist for one course section.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use packsched_collections::{BoundedList, LinkedList, LinkedQueue};
use packsched_core::config::RosterConfig;
use packsched_core::error::AppError;
use packsched_core::result::AppResult;

use super::promotion::PromotionHook;

/// Where an entity stands relative to one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    NotPresent,
    Enrolled,
    Waitlisted,
}

/// Which collection a dropped entity was removed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Removal {
    Enrolled,
    Waitlisted,
    NotPresent,
}

/// Result of [`CourseRoll::drop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome<T> {
    pub removed: Removal,
    /// Entity moved from the waitlist into the freed seat, if any.
    pub promoted: Option<T>,
}

/// Seats and waitlist for a single course section.
///
/// An entity is in at most one of {enrolled, waitlist}. The enrolled list
/// never exceeds `enrollment_cap` and the waitlist never exceeds the
/// configured waitlist capacity.
#[derive(Debug, Clone)]
pub struct CourseRoll<T> {
    roll: LinkedList<T>,
    waitlist: LinkedQueue<T>,
    enrollment_cap: usize,
    bounds: RosterConfig,
}

impl<T> CourseRoll<T>
where
    T: PartialEq + Clone + fmt::Debug,
{
    /// Creates an empty roll; `capacity` must lie within the configured bounds.
    pub fn new(capacity: usize, bounds: &RosterConfig) -> AppResult<Self> {
        check_bounds(capacity, bounds)?;
        Ok(Self {
            roll: LinkedList::new(capacity),
            waitlist: LinkedQueue::new(bounds.waitlist_capacity),
            enrollment_cap: capacity,
            bounds: *bounds,
        })
    }

    /// Maximum number of seated entities.
    pub fn enrollment_cap(&self) -> usize {
        self.enrollment_cap
    }

    /// Change the enrollment capacity.
    ///
    /// Fails with `InvalidRange` outside the configured bounds and with
    /// `CapacityBelowOccupancy` below the current enrolled count. Raising
    /// the capacity does not pull anyone off the waitlist.
    pub fn set_enrollment_cap(&mut self, capacity: usize) -> AppResult<()> {
        check_bounds(capacity, &self.bounds)?;
        if capacity < self.roll.len() {
            return Err(AppError::capacity_below_occupancy(format!(
                "Capacity {capacity} is below the {} students already enrolled",
                self.roll.len()
            )));
        }
        self.roll.set_capacity(capacity)?;
        self.enrollment_cap = capacity;
        info!(capacity, "Enrollment capacity updated");
        Ok(())
    }

    /// Seats still available on the roll.
    pub fn open_seats(&self) -> usize {
        self.enrollment_cap.saturating_sub(self.roll.len())
    }

    /// Number of seated entities.
    pub fn enrolled_count(&self) -> usize {
        self.roll.len()
    }

    /// Number of entities waiting for a seat.
    pub fn waitlist_count(&self) -> usize {
        self.waitlist.len()
    }

    /// Waitlist size limit, taken from the configuration.
    pub fn waitlist_capacity(&self) -> usize {
        self.waitlist.capacity()
    }

    /// Whether `entity` holds a seat.
    pub fn is_enrolled(&self, entity: &T) -> bool {
        self.roll.contains(entity)
    }

    /// Whether `entity` is waiting for a seat.
    pub fn is_waitlisted(&self, entity: &T) -> bool {
        self.waitlist.contains(entity)
    }

    /// Where `entity` stands on this roll.
    pub fn status_of(&self, entity: &T) -> EnrollmentStatus {
        if self.is_enrolled(entity) {
            EnrollmentStatus::Enrolled
        } else if self.is_waitlisted(entity) {
            EnrollmentStatus::Waitlisted
        } else {
            EnrollmentStatus::NotPresent
        }
    }

    /// Enrolled entities in enrollment order.
    pub fn enrolled(&self) -> impl Iterator<Item = &T> + '_ {
        self.roll.iter()
    }

    /// Waitlisted entities, next to be promoted first.
    pub fn waitlist(&self) -> impl Iterator<Item = &T> + '_ {
        self.waitlist.iter()
    }

    /// Seat `entity`, or put it on the waitlist when the roll is full.
    ///
    /// Fails with `DuplicateValue` when the entity already holds a seat or a
    /// waitlist spot, and with `RosterFull` when both are full.
    pub fn enroll(&mut self, entity: T) -> AppResult<EnrollmentStatus> {
        if self.waitlist.contains(&entity) {
            return Err(AppError::duplicate_value(
                "This student is already on the waitlist",
            ));
        }

        if self.roll.len() < self.enrollment_cap {
            self.roll.push_back(entity.clone())?;
            debug!(entity = ?entity, seated = self.roll.len(), "Enrolled");
            return Ok(EnrollmentStatus::Enrolled);
        }

        if self.roll.contains(&entity) {
            return Err(AppError::duplicate_value("This student is already enrolled"));
        }
        if self.waitlist.is_full() {
            return Err(AppError::roster_full(format!(
                "Roll and waitlist are full ({} seats, {} waitlist spots)",
                self.enrollment_cap,
                self.waitlist.capacity()
            )));
        }
        self.waitlist.enqueue(entity.clone())?;
        debug!(entity = ?entity, position = self.waitlist.len(), "Waitlisted");
        Ok(EnrollmentStatus::Waitlisted)
    }

    /// Remove `entity` from the roll or the waitlist.
    ///
    /// Freeing a seat promotes the longest-waiting entity, which is then
    /// reported to `hook`. Dropping an entity that is in neither collection
    /// is a no-op.
    pub fn drop(
        &mut self,
        entity: &T,
        hook: &mut dyn PromotionHook<T>,
    ) -> AppResult<DropOutcome<T>> {
        if let Some(index) = self.roll.index_of(entity) {
            self.roll.remove_at(index)?;
            debug!(entity = ?entity, "Dropped from roll");

            let promoted = if self.waitlist.is_empty() {
                None
            } else {
                let next = self.waitlist.dequeue()?;
                self.roll.push_back(next.clone())?;
                info!(
                    entity = ?next,
                    waitlist = self.waitlist.len(),
                    "Promoted from waitlist"
                );
                hook.on_promoted(&next);
                Some(next)
            };

            return Ok(DropOutcome {
                removed: Removal::Enrolled,
                promoted,
            });
        }

        let removed = self.waitlist.retain(|waiting| waiting != entity)?;
        if removed > 0 {
            debug!(entity = ?entity, "Dropped from waitlist");
            return Ok(DropOutcome {
                removed: Removal::Waitlisted,
                promoted: None,
            });
        }

        Ok(DropOutcome {
            removed: Removal::NotPresent,
            promoted: None,
        })
    }

    /// Whether `entity` could currently take a seat or a waitlist spot.
    ///
    /// Does not consider whether the waitlist itself is full.
    pub fn can_enroll(&self, entity: &T) -> bool {
        if self.roll.len() < self.enrollment_cap {
            return !self.roll.contains(entity);
        }
        !self.roll.contains(entity) && !self.waitlist.contains(entity)
    }
}

fn check_bounds(capacity: usize, bounds: &RosterConfig) -> AppResult<()> {
    if bounds.accepts(capacity) {
        Ok(())
    } else {
        Err(AppError::invalid_range(format!(
            "Enrollment capacity {capacity} must be between {} and {}",
            bounds.min_enrollment, bounds.max_enrollment
        )))
    }
}
