//! Text leaf.
//!
//! There is no font machinery: every character is half as wide as the text
//! size and a line is exactly one text size tall.

use std::rc::Rc;

use tessera_ui_graphics::Size;
use tessera_ui_layout::Constraints;

use crate::component::{same_component, Component, ComponentRef};
use crate::content::MountContent;
use crate::context::ComponentContext;
use crate::error::{BuildError, ComponentError};
use crate::props::{CommonProps, CommonPropsBuilder, RequiredProps};

pub const DEFAULT_TEXT_SIZE: f32 = 14.0;

const REQUIRED: &[&str] = &["text"];

#[derive(Debug, PartialEq)]
pub struct Text {
    text: String,
    text_size: f32,
    props: CommonProps,
}

impl Text {
    pub fn create() -> TextBuilder {
        TextBuilder {
            text: None,
            text_size: DEFAULT_TEXT_SIZE,
            props: CommonProps::default(),
            required: RequiredProps::new("Text", REQUIRED),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }
}

impl Component for Text {
    fn simple_name(&self) -> &'static str {
        "Text"
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
        _constraints: Constraints,
    ) -> Result<Size, ComponentError> {
        let chars = self.text.chars().count() as f32;
        Ok(Size::new(chars * self.text_size * 0.5, self.text_size))
    }

    fn on_mount(&self, _ctx: &ComponentContext, content: &MountContent) -> Result<(), ComponentError> {
        content.set_text(Some(self.text.clone()));
        Ok(())
    }

    fn on_unmount(
        &self,
        _ctx: &ComponentContext,
        content: &MountContent,
    ) -> Result<(), ComponentError> {
        content.set_text(None);
        Ok(())
    }
}

pub struct TextBuilder {
    text: Option<String>,
    text_size: f32,
    props: CommonProps,
    required: RequiredProps,
}

impl TextBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self.required.mark(0);
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn build(self) -> Result<ComponentRef, BuildError> {
        self.required.check()?;
        Ok(Rc::new(Text {
            text: self.text.unwrap_or_default(),
            text_size: self.text_size,
            props: self.props,
        }))
    }
}

impl CommonPropsBuilder for TextBuilder {
    fn common_props_mut(&mut self) -> &mut CommonProps {
        &mut self.props
    }
}
