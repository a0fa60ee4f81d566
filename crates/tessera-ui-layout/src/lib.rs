//! Layout contracts & working range predicates for Tessera

mod axis;
mod constraints;
mod geometry;
mod working_range;

pub use axis::*;
pub use constraints::*;
pub use geometry::*;
pub use working_range::*;

pub mod prelude {
    pub use crate::axis::FlexDirection;
    pub use crate::constraints::{Constraints, SizeSpec};
    pub use crate::geometry::LayoutGeometry;
    pub use crate::working_range::{BoundaryWorkingRange, WorkingRange};
}

#[cfg(test)]
#[path = "tests/working_range_tests.rs"]
mod working_range_tests;
