//! Components that record their lifecycle into a [`LifecycleTracker`].

use std::cell::RefCell;
use std::rc::Rc;

use tessera_ui::{
    BuildError, CommonProps, CommonPropsBuilder, Component, ComponentContext, ComponentError,
    ComponentRef, MountContent, RequiredProps, Resolution, WorkingRangeSpec,
};
use tessera_ui_graphics::{Rect, Size};
use tessera_ui_layout::{Constraints, WorkingRange};

use crate::lifecycle::{LifecycleStep, LifecycleTracker};

/// Holds the content a tester was last mounted into.
#[derive(Clone, Debug, Default)]
pub struct ContentSlot {
    content: Rc<RefCell<Option<MountContent>>>,
}

impl ContentSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<MountContent> {
        self.content.borrow().clone()
    }

    fn set(&self, content: &MountContent) {
        *self.content.borrow_mut() = Some(content.clone());
    }
}

/// Mountable leaf recording every callback it receives.
pub struct MountSpecLifecycleTester {
    tracker: LifecycleTracker,
    intrinsic_size: Size,
    default_alpha: Option<f32>,
    content_slot: Option<ContentSlot>,
    fail_on: Option<LifecycleStep>,
    props: CommonProps,
}

impl MountSpecLifecycleTester {
    pub fn create() -> MountSpecLifecycleTesterBuilder {
        MountSpecLifecycleTesterBuilder {
            tracker: None,
            intrinsic_size: Size::new(10.0, 10.0),
            default_alpha: None,
            content_slot: None,
            fail_on: None,
            props: CommonProps::default(),
            required: RequiredProps::new("MountSpecLifecycleTester", &["lifecycle_tracker"]),
        }
    }

    fn step(&self, step: LifecycleStep) -> Result<(), ComponentError> {
        self.tracker.add_step(step);
        if self.fail_on == Some(step) {
            return Err(ComponentError::lifecycle(
                "MountSpecLifecycleTester",
                step.callback_name(),
                "failure requested by test",
            ));
        }
        Ok(())
    }
}

impl Component for MountSpecLifecycleTester {
    fn simple_name(&self) -> &'static str {
        "MountSpecLifecycleTester"
    }

    fn common_props(&self) -> &CommonProps {
        &self.props
    }

    fn on_prepare(&self, _ctx: &ComponentContext) -> Result<(), ComponentError> {
        self.step(LifecycleStep::OnPrepare)
    }

    fn on_measure(
        &self,
        _ctx: &ComponentContext,
        _constraints: Constraints,
    ) -> Result<Size, ComponentError> {
        self.step(LifecycleStep::OnMeasure)?;
        Ok(self.intrinsic_size)
    }

    fn on_bounds_defined(&self, _ctx: &ComponentContext, _bounds: Rect) -> Result<(), ComponentError> {
        self.step(LifecycleStep::OnBoundsDefined)
    }

    fn create_mount_content(&self, _ctx: &ComponentContext) -> MountContent {
        self.tracker.add_step(LifecycleStep::OnCreateMountContent);
        MountContent::new(self.content_type())
    }

    fn on_mount(&self, _ctx: &ComponentContext, content: &MountContent) -> Result<(), ComponentError> {
        if let Some(alpha) = self.default_alpha {
            content.set_alpha(alpha);
        }
        if let Some(slot) = &self.content_slot {
            slot.set(content);
        }
        self.step(LifecycleStep::OnMount)
    }

    fn on_bind(&self, _ctx: &ComponentContext, _content: &MountContent) -> Result<(), ComponentError> {
        self.step(LifecycleStep::OnBind)
    }

    fn on_attached(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        self.step(LifecycleStep::OnAttached)
    }

    fn on_detached(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        self.step(LifecycleStep::OnDetached)
    }

    fn on_unbind(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        self.step(LifecycleStep::OnUnbind)
    }

    fn on_unmount(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        self.step(LifecycleStep::OnUnmount)
    }
}

pub struct MountSpecLifecycleTesterBuilder {
    tracker: Option<LifecycleTracker>,
    intrinsic_size: Size,
    default_alpha: Option<f32>,
    content_slot: Option<ContentSlot>,
    fail_on: Option<LifecycleStep>,
    props: CommonProps,
    required: RequiredProps,
}

impl MountSpecLifecycleTesterBuilder {
    pub fn lifecycle_tracker(mut self, tracker: &LifecycleTracker) -> Self {
        self.tracker = Some(tracker.clone());
        self.required.mark(0);
        self
    }

    pub fn intrinsic_size(mut self, width: f32, height: f32) -> Self {
        self.intrinsic_size = Size::new(width, height);
        self
    }

    /// Alpha the tester writes to its content during `on_mount`.
    pub fn default_alpha(mut self, alpha: f32) -> Self {
        self.default_alpha = Some(alpha);
        self
    }

    pub fn content_slot(mut self, slot: &ContentSlot) -> Self {
        self.content_slot = Some(slot.clone());
        self
    }

    /// Makes the callback for `step` return an error after recording it.
    pub fn fail_on(mut self, step: LifecycleStep) -> Self {
        self.fail_on = Some(step);
        self
    }

    pub fn build(self) -> Result<ComponentRef, BuildError> {
        self.required.check()?;
        Ok(Rc::new(MountSpecLifecycleTester {
            tracker: self.tracker.unwrap_or_default(),
            intrinsic_size: self.intrinsic_size,
            default_alpha: self.default_alpha,
            content_slot: self.content_slot,
            fail_on: self.fail_on,
            props: self.props,
        }))
    }
}

impl CommonPropsBuilder for MountSpecLifecycleTesterBuilder {
    fn common_props_mut(&mut self) -> &mut CommonProps {
        &mut self.props
    }
}

/// Composite tester: records resolution and renders an optional child.
pub struct LayoutSpecLifecycleTester {
    tracker: LifecycleTracker,
    child: Option<ComponentRef>,
    props: CommonProps,
}

impl LayoutSpecLifecycleTester {
    pub fn create(tracker: &LifecycleTracker) -> LayoutSpecLifecycleTesterBuilder {
        LayoutSpecLifecycleTesterBuilder {
            tracker: tracker.clone(),
            child: None,
            props: CommonProps::default(),
        }
    }
}

impl Component for LayoutSpecLifecycleTester {
    fn simple_name(&self) -> &'static str {
        "LayoutSpecLifecycleTester"
    }

    fn common_props(&self) -> &CommonProps {
        &self.props
    }

    fn on_create_layout(&self, _ctx: &ComponentContext) -> Result<Resolution, ComponentError> {
        self.tracker.add_step(LifecycleStep::OnCreateLayout);
        Ok(match &self.child {
            Some(child) => Resolution::Delegate(Rc::clone(child)),
            None => Resolution::Null,
        })
    }
}

pub struct LayoutSpecLifecycleTesterBuilder {
    tracker: LifecycleTracker,
    child: Option<ComponentRef>,
    props: CommonProps,
}

impl LayoutSpecLifecycleTesterBuilder {
    pub fn child(mut self, child: impl Into<Option<ComponentRef>>) -> Self {
        self.child = child.into();
        self
    }

    pub fn build(self) -> ComponentRef {
        Rc::new(LayoutSpecLifecycleTester {
            tracker: self.tracker,
            child: self.child,
            props: self.props,
        })
    }
}

impl CommonPropsBuilder for LayoutSpecLifecycleTesterBuilder {
    fn common_props_mut(&mut self) -> &mut CommonProps {
        &mut self.props
    }
}

/// Leaf declaring one named working range.
pub struct WorkingRangeTester {
    tracker: LifecycleTracker,
    name: &'static str,
    range: Rc<dyn WorkingRange>,
    props: CommonProps,
}

impl WorkingRangeTester {
    pub fn create(
        tracker: &LifecycleTracker,
        name: &'static str,
        range: Rc<dyn WorkingRange>,
    ) -> WorkingRangeTesterBuilder {
        WorkingRangeTesterBuilder {
            tracker: tracker.clone(),
            name,
            range,
            props: CommonProps::default(),
        }
    }
}

impl Component for WorkingRangeTester {
    fn simple_name(&self) -> &'static str {
        "WorkingRangeTester"
    }

    fn common_props(&self) -> &CommonProps {
        &self.props
    }

    fn working_ranges(&self) -> Vec<WorkingRangeSpec> {
        vec![WorkingRangeSpec {
            name: self.name,
            range: Rc::clone(&self.range),
        }]
    }

    fn on_entered_range(&self, _ctx: &ComponentContext, name: &str) -> Result<(), ComponentError> {
        log::trace!("{} entered", name);
        self.tracker.add_step(LifecycleStep::OnEnteredRange);
        Ok(())
    }

    fn on_exited_range(&self, _ctx: &ComponentContext, name: &str) -> Result<(), ComponentError> {
        log::trace!("{} exited", name);
        self.tracker.add_step(LifecycleStep::OnExitedRange);
        Ok(())
    }
}

pub struct WorkingRangeTesterBuilder {
    tracker: LifecycleTracker,
    name: &'static str,
    range: Rc<dyn WorkingRange>,
    props: CommonProps,
}

impl WorkingRangeTesterBuilder {
    pub fn build(self) -> ComponentRef {
        Rc::new(WorkingRangeTester {
            tracker: self.tracker,
            name: self.name,
            range: self.range,
            props: self.props,
        })
    }
}

impl CommonPropsBuilder for WorkingRangeTesterBuilder {
    fn common_props_mut(&mut self) -> &mut CommonProps {
        &mut self.props
    }
}
