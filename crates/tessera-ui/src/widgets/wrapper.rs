use std::rc::Rc;

use crate::component::{Component, ComponentRef, Resolution};
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::props::{CommonProps, CommonPropsBuilder};

/// Adds common props to another component without changing what it renders.
///
/// A wrapper without a delegate renders nothing.
pub struct Wrapper {
    delegate: Option<ComponentRef>,
    props: CommonProps,
}

impl Wrapper {
    pub fn create(delegate: impl Into<Option<ComponentRef>>) -> WrapperBuilder {
        WrapperBuilder {
            delegate: delegate.into(),
            props: CommonProps::default(),
        }
    }
}

impl Component for Wrapper {
    fn simple_name(&self) -> &'static str {
        "Wrapper"
    }

    fn common_props(&self) -> &CommonProps {
        &self.props
    }

    fn on_create_layout(&self, _ctx: &ComponentContext) -> Result<Resolution, ComponentError> {
        Ok(match &self.delegate {
            Some(delegate) => Resolution::Delegate(Rc::clone(delegate)),
            None => Resolution::Null,
        })
    }
}

pub struct WrapperBuilder {
    delegate: Option<ComponentRef>,
    props: CommonProps,
}

impl WrapperBuilder {
    pub fn build(self) -> ComponentRef {
        Rc::new(Wrapper {
            delegate: self.delegate,
            props: self.props,
        })
    }
}

impl CommonPropsBuilder for WrapperBuilder {
    fn common_props_mut(&mut self) -> &mut CommonProps {
        &mut self.props
    }
}
