//! Declarative components resolved into layouts and mounted into headless
//! content, built on the Tessera core runtime.

mod component;
mod content;
mod context;
mod error;
mod layout_state;
mod mount_state;
mod node;
mod pools;
mod props;
mod tree;
pub mod widgets;
mod working_range;

pub use component::{
    same_component, AsAny, Component, ComponentRef, ContainerSpec, Resolution, WorkingRangeSpec,
};
pub use content::MountContent;
pub use context::{ComponentContext, ComponentContextBuilder};
pub use error::{BuildError, ComponentError};
pub use layout_state::{LayoutState, RenderTreeNode, RenderUnitId};
pub use mount_state::{MountItem, MountItemState, MountState, MountStats};
pub use node::{resolve, InternalNode, NodeChildren, NodeKind};
pub use pools::MountContentPools;
pub use props::{CommonProps, CommonPropsBuilder, RequiredProps};
pub use tree::{ComponentTree, ComponentTreeBuilder};
pub use working_range::{VisibleWindow, WorkingRangeContainer, WorkingRangeStatusHandler};

pub use tessera_core::{
    ComponentsConfiguration, ComponentsLogger, DerivedDynamicValue, Dynamic, DynamicValue,
    DynamicValueError, LogEvent, DEFAULT_POOL_SIZE,
};
pub use tessera_ui_graphics::{EdgeInsets, Rect, Size};
pub use tessera_ui_layout::{BoundaryWorkingRange, Constraints, FlexDirection, SizeSpec, WorkingRange};

pub mod prelude {
    pub use crate::component::{Component, ComponentRef, Resolution};
    pub use crate::context::ComponentContext;
    pub use crate::props::CommonPropsBuilder;
    pub use crate::tree::ComponentTree;
    pub use crate::widgets::{Column, HorizontalScroll, Row, SolidColor, Text, Wrapper};
    pub use tessera_ui_layout::SizeSpec;
}

#[cfg(test)]
#[path = "tests/mount_state_tests.rs"]
mod mount_state_tests;

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod resolve_tests;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
