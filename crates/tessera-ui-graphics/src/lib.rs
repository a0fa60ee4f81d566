//! Pure geometry data shared by Tessera layout and mounting.
//!
//! Nothing in here knows about components; it only describes sizes, rectangles
//! and per-edge insets.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Rect, Size};
}
