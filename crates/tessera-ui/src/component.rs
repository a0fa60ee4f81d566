//! The component contract.
//!
//! A component is an immutable description. Resolution asks it what it
//! renders ([`Resolution`]); components that resolve to a [`Resolution::Leaf`]
//! own mount content and receive the measure and mount lifecycle callbacks.

use std::any::Any;
use std::rc::Rc;

use tessera_ui_graphics::{EdgeInsets, Rect, Size};
use tessera_ui_layout::{Constraints, FlexDirection, WorkingRange};

use crate::content::MountContent;
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::props::CommonProps;

pub type ComponentRef = Rc<dyn Component>;

/// What a component renders into.
pub enum Resolution {
    /// Nothing; the component resolves to the null layout.
    Null,
    /// Another component stands in for this one. Common props set on the
    /// wrapper are layered over the delegate's.
    Delegate(ComponentRef),
    /// A stack of children.
    Container(ContainerSpec),
    /// A mountable primitive backed by this component's own content.
    Leaf,
}

/// Children and arrangement of a stack container.
#[derive(Clone, Default)]
pub struct ContainerSpec {
    pub direction: FlexDirection,
    pub padding: EdgeInsets,
    pub children: Vec<ComponentRef>,
}

pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Named working range declared by a component.
#[derive(Clone)]
pub struct WorkingRangeSpec {
    pub name: &'static str,
    pub range: Rc<dyn WorkingRange>,
}

/// A declarative UI component.
///
/// Every callback has a default so simple components only override what they
/// need. Callbacks return `Result`; an error aborts the pass that triggered it
/// and reaches the caller unchanged.
pub trait Component: AsAny {
    /// Type name; two components of the same type are interchangeable for
    /// mount content reuse.
    fn simple_name(&self) -> &'static str;

    fn common_props(&self) -> &CommonProps;

    /// Resolution step. Components that do not override this are leaves.
    fn on_create_layout(&self, _ctx: &ComponentContext) -> Result<Resolution, ComponentError> {
        Ok(Resolution::Leaf)
    }

    /// True when `other` renders the same output, so a mounted item can keep
    /// its bound state instead of being re-mounted.
    fn is_equivalent_to(&self, _other: &dyn Component) -> bool {
        false
    }

    /// Key for mount content pooling.
    fn content_type(&self) -> &'static str {
        self.simple_name()
    }

    /// Pool capacity for this content type; `None` uses the configured default.
    fn pool_size(&self) -> Option<usize> {
        None
    }

    fn on_prepare(&self, _ctx: &ComponentContext) -> Result<(), ComponentError> {
        Ok(())
    }

    fn on_measure(
        &self,
        _ctx: &ComponentContext,
        _constraints: Constraints,
    ) -> Result<Size, ComponentError> {
        Ok(Size::ZERO)
    }

    fn on_bounds_defined(
        &self,
        _ctx: &ComponentContext,
        _bounds: Rect,
    ) -> Result<(), ComponentError> {
        Ok(())
    }

    fn create_mount_content(&self, _ctx: &ComponentContext) -> MountContent {
        MountContent::new(self.content_type())
    }

    fn on_mount(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        Ok(())
    }

    fn on_bind(&self, _ctx: &ComponentContext, _content: &MountContent) -> Result<(), ComponentError> {
        Ok(())
    }

    fn on_attached(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        Ok(())
    }

    fn on_detached(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        Ok(())
    }

    fn on_unbind(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        Ok(())
    }

    fn on_unmount(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        Ok(())
    }

    fn working_ranges(&self) -> Vec<WorkingRangeSpec> {
        Vec::new()
    }

    fn on_entered_range(&self, _ctx: &ComponentContext, _name: &str) -> Result<(), ComponentError> {
        Ok(())
    }

    fn on_exited_range(&self, _ctx: &ComponentContext, _name: &str) -> Result<(), ComponentError> {
        Ok(())
    }
}

/// Equivalence by value for components that implement `PartialEq`.
pub fn same_component<T>(this: &T, other: &dyn Component) -> bool
where
    T: Component + PartialEq + 'static,
{
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| other == this)
}
