use std::rc::Rc;

use tessera_ui_graphics::Size;
use tessera_ui_layout::Constraints;

use crate::component::{same_component, Component, ComponentRef};
use crate::content::MountContent;
use crate::context::ComponentContext;
use crate::error::{BuildError, ComponentError};
use crate::props::{CommonProps, CommonPropsBuilder, RequiredProps};

const REQUIRED: &[&str] = &["color"];

/// Fills its bounds with one ARGB color. Sized by its width and height props.
#[derive(Debug, PartialEq)]
pub struct SolidColor {
    color: u32,
    props: CommonProps,
}

impl SolidColor {
    pub fn create() -> SolidColorBuilder {
        SolidColorBuilder {
            color: 0,
            props: CommonProps::default(),
            required: RequiredProps::new("SolidColor", REQUIRED),
        }
    }

    pub fn color(&self) -> u32 {
        self.color
    }
}

impl Component for SolidColor {
    fn simple_name(&self) -> &'static str {
        "SolidColor"
    }

    fn common_props(&self) -> &CommonProps {
        &self.props
    }

    fn is_equivalent_to(&self, other: &dyn Component) -> bool {
        same_component(self, other)
    }

    fn on_measure(
        &self,
        _ctx: &ComponentContext,
        constraints: Constraints,
    ) -> Result<Size, ComponentError> {
        Ok(Size::new(constraints.min_width, constraints.min_height))
    }

    fn on_mount(&self, _ctx: &ComponentContext, content: &MountContent) -> Result<(), ComponentError> {
        content.set_color(Some(self.color));
        Ok(())
    }

    fn on_unmount(
        &self,
        _ctx: &ComponentContext,
        content: &MountContent,
    ) -> Result<(), ComponentError> {
        content.set_color(None);
        Ok(())
    }
}

pub struct SolidColorBuilder {
    color: u32,
    props: CommonProps,
    required: RequiredProps,
}

impl SolidColorBuilder {
    pub fn color(mut self, color: u32) -> Self {
        self.color = color;
        self.required.mark(0);
        self
    }

    pub fn build(self) -> Result<ComponentRef, BuildError> {
        self.required.check()?;
        Ok(Rc::new(SolidColor {
            color: self.color,
            props: self.props,
        }))
    }
}

impl CommonPropsBuilder for SolidColorBuilder {
    fn common_props_mut(&mut self) -> &mut CommonProps {
        &mut self.props
    }
}
