use tessera_ui_graphics::EdgeInsets;
use tessera_ui_layout::FlexDirection;

use std::rc::Rc;

use crate::component::{Component, ComponentRef, ContainerSpec, Resolution};
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::props::{CommonProps, CommonPropsBuilder};

/// Stacks its children along one axis.
pub struct Stack {
    direction: FlexDirection,
    padding: EdgeInsets,
    children: Vec<ComponentRef>,
    props: CommonProps,
}

impl Stack {
    pub fn direction(&self) -> FlexDirection {
        self.direction
    }

    pub fn children(&self) -> &[ComponentRef] {
        &self.children
    }
}

impl Component for Stack {
    fn simple_name(&self) -> &'static str {
        match self.direction {
            FlexDirection::Column => "Column",
            FlexDirection::Row => "Row",
        }
    }

    fn common_props(&self) -> &CommonProps {
        &self.props
    }

    fn on_create_layout(&self, _ctx: &ComponentContext) -> Result<Resolution, ComponentError> {
        Ok(Resolution::Container(ContainerSpec {
            direction: self.direction,
            padding: self.padding,
            children: self.children.clone(),
        }))
    }
}

/// Vertical stack.
pub struct Column;

impl Column {
    pub fn create() -> StackBuilder {
        StackBuilder::new(FlexDirection::Column)
    }
}

/// Horizontal stack.
pub struct Row;

impl Row {
    pub fn create() -> StackBuilder {
        StackBuilder::new(FlexDirection::Row)
    }
}

pub struct StackBuilder {
    direction: FlexDirection,
    padding: EdgeInsets,
    children: Vec<ComponentRef>,
    props: CommonProps,
}

impl StackBuilder {
    fn new(direction: FlexDirection) -> Self {
        Self {
            direction,
            padding: EdgeInsets::default(),
            children: Vec::new(),
            props: CommonProps::default(),
        }
    }

    /// Appends a child. `None` is ignored.
    pub fn child(mut self, child: impl Into<Option<ComponentRef>>) -> Self {
        if let Some(child) = child.into() {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ComponentRef>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn build(self) -> ComponentRef {
        Rc::new(Stack {
            direction: self.direction,
            padding: self.padding,
            children: self.children,
            props: self.props,
        })
    }
}

impl CommonPropsBuilder for StackBuilder {
    fn common_props_mut(&mut self) -> &mut CommonProps {
        &mut self.props
    }
}
