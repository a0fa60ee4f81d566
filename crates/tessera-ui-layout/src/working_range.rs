//! Working ranges decide when content near the visible window becomes active.
//!
//! A range is evaluated against an item position and the current visible and
//! fully visible index windows. Entering and exiting are asked separately so
//! a range may leave a dead zone between the two.

/// Predicate pair deciding range entry and exit for an item position.
pub trait WorkingRange {
    fn should_enter_range(
        &self,
        position: i32,
        first_visible_index: i32,
        last_visible_index: i32,
        first_fully_visible_index: i32,
        last_fully_visible_index: i32,
    ) -> bool;

    fn should_exit_range(
        &self,
        position: i32,
        first_visible_index: i32,
        last_visible_index: i32,
        first_fully_visible_index: i32,
        last_fully_visible_index: i32,
    ) -> bool;
}

/// Default number of positions added on each side of the visible window.
pub const DEFAULT_BOUNDARY_OFFSET: i32 = 1;

/// Range covering the visible window widened by a fixed offset on both sides.
///
/// Only the visible indices matter; the fully visible ones are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryWorkingRange {
    offset: i32,
}

impl Default for BoundaryWorkingRange {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDARY_OFFSET)
    }
}

impl BoundaryWorkingRange {
    pub fn new(offset: i32) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    fn lower_bound(&self, first_visible_index: i32) -> i32 {
        first_visible_index.saturating_sub(self.offset)
    }

    fn upper_bound(&self, last_visible_index: i32) -> i32 {
        last_visible_index.saturating_add(self.offset)
    }
}

impl WorkingRange for BoundaryWorkingRange {
    fn should_enter_range(
        &self,
        position: i32,
        first_visible_index: i32,
        last_visible_index: i32,
        _first_fully_visible_index: i32,
        _last_fully_visible_index: i32,
    ) -> bool {
        position >= self.lower_bound(first_visible_index)
            && position <= self.upper_bound(last_visible_index)
    }

    fn should_exit_range(
        &self,
        position: i32,
        first_visible_index: i32,
        last_visible_index: i32,
        _first_fully_visible_index: i32,
        _last_fully_visible_index: i32,
    ) -> bool {
        position < self.lower_bound(first_visible_index)
            || position > self.upper_bound(last_visible_index)
    }
}
