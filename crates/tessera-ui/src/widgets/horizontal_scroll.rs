//! Horizontally scrolling container.
//!
//! The content is laid out in its own [`ComponentTree`] with unbounded width
//! and hosted inside this component's mount content. Every item of the
//! content is mounted, including the ones scrolled out of view, so attach and
//! detach reach all of them.

use std::rc::Rc;

use tessera_ui_graphics::Size;
use tessera_ui_layout::{Constraints, SizeSpec};

use crate::component::{Component, ComponentRef};
use crate::content::MountContent;
use crate::context::ComponentContext;
use crate::error::{BuildError, ComponentError};
use crate::layout_state::measure_component;
use crate::props::{CommonProps, CommonPropsBuilder, RequiredProps};
use crate::tree::ComponentTree;

const REQUIRED: &[&str] = &["content"];

pub struct HorizontalScroll {
    content: ComponentRef,
    props: CommonProps,
}

impl HorizontalScroll {
    pub fn create() -> HorizontalScrollBuilder {
        HorizontalScrollBuilder {
            content: None,
            props: CommonProps::default(),
            required: RequiredProps::new("HorizontalScroll", REQUIRED),
        }
    }

    pub fn content(&self) -> &ComponentRef {
        &self.content
    }
}

impl Component for HorizontalScroll {
    fn simple_name(&self) -> &'static str {
        "HorizontalScroll"
    }

    fn common_props(&self) -> &CommonProps {
        &self.props
    }

    fn is_equivalent_to(&self, other: &dyn Component) -> bool {
        other
            .as_any()
            .downcast_ref::<HorizontalScroll>()
            .is_some_and(|other| {
                Rc::ptr_eq(&self.content, &other.content) && self.props == other.props
            })
    }

    fn on_measure(
        &self,
        ctx: &ComponentContext,
        constraints: Constraints,
    ) -> Result<Size, ComponentError> {
        let content = measure_component(
            ctx,
            &self.content,
            Constraints::loose(f32::INFINITY, constraints.max_height),
        )?;
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            content.width
        };
        Ok(Size::new(width, content.height))
    }

    fn on_mount(&self, ctx: &ComponentContext, content: &MountContent) -> Result<(), ComponentError> {
        let mut tree = ComponentTree::create(ctx, Some(Rc::clone(&self.content)))
            .size_spec(SizeSpec::unbounded_width(content.bounds().height))
            .build()?;
        tree.mount()?;
        content.set_nested_tree(tree);
        Ok(())
    }

    fn on_unmount(
        &self,
        _ctx: &ComponentContext,
        content: &MountContent,
    ) -> Result<(), ComponentError> {
        if let Some(mut tree) = content.take_nested_tree() {
            tree.release()?;
        }
        Ok(())
    }
}

pub struct HorizontalScrollBuilder {
    content: Option<ComponentRef>,
    props: CommonProps,
    required: RequiredProps,
}

impl HorizontalScrollBuilder {
    pub fn content(mut self, content: ComponentRef) -> Self {
        self.content = Some(content);
        self.required.mark(0);
        self
    }

    pub fn build(self) -> Result<ComponentRef, BuildError> {
        self.required.check()?;
        let Some(content) = self.content else {
            return Err(BuildError::MissingRequiredProps {
                component: "HorizontalScroll",
                props: REQUIRED.to_vec(),
            });
        };
        Ok(Rc::new(HorizontalScroll {
            content,
            props: self.props,
        }))
    }
}

impl CommonPropsBuilder for HorizontalScrollBuilder {
    fn common_props_mut(&mut self) -> &mut CommonProps {
        &mut self.props
    }
}
