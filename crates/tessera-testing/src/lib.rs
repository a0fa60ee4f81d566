//! Test components and helpers for exercising the Tessera lifecycle.
//!
//! Tester components record every callback they receive into a shared
//! [`LifecycleTracker`], so tests can assert on exact callback order.

mod fixtures;
mod harness;
mod lifecycle;
mod logger;
mod testers;

pub use fixtures::GeometryFixture;
pub use harness::{first_content, mount_tree};
pub use lifecycle::{LifecycleStep, LifecycleTracker};
pub use logger::RecordingLogger;
pub use testers::{
    ContentSlot, LayoutSpecLifecycleTester, LayoutSpecLifecycleTesterBuilder,
    MountSpecLifecycleTester, MountSpecLifecycleTesterBuilder, WorkingRangeTester,
    WorkingRangeTesterBuilder,
};
