//! Components shared by the unit tests of this crate.

use std::cell::RefCell;
use std::rc::Rc;

use crate::component::{Component, ComponentRef, WorkingRangeSpec};
use crate::content::MountContent;
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::props::CommonProps;
use tessera_ui_graphics::Size;
use tessera_ui_layout::Constraints;

pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

/// Leaf that writes `name:callback` to a journal for every callback.
pub struct Probe {
    pub name: &'static str,
    pub journal: Journal,
    pub size: Size,
    pub mount_alpha: Option<f32>,
    pub content_type: &'static str,
    pub props: CommonProps,
    pub ranges: Vec<WorkingRangeSpec>,
    pub equivalent: bool,
}

impl Probe {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: Rc::clone(journal),
            size: Size::new(10.0, 10.0),
            mount_alpha: None,
            content_type: "Probe",
            props: CommonProps::default(),
            ranges: Vec::new(),
            equivalent: false,
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn key(mut self, key: &str) -> Self {
        self.props.key = Some(key.to_string());
        self
    }

    pub fn props(mut self, props: CommonProps) -> Self {
        self.props = props;
        self
    }

    pub fn build(self) -> ComponentRef {
        Rc::new(self)
    }

    fn record(&self, callback: &str) {
        self.journal
            .borrow_mut()
            .push(format!("{}:{}", self.name, callback));
    }
}

impl Component for Probe {
    fn simple_name(&self) -> &'static str {
        "Probe"
    }

    fn common_props(&self) -> &CommonProps {
        &self.props
    }

    fn content_type(&self) -> &'static str {
        self.content_type
    }

    fn is_equivalent_to(&self, other: &dyn Component) -> bool {
        self.equivalent
            && other
                .as_any()
                .downcast_ref::<Probe>()
                .is_some_and(|other| other.name == self.name)
    }

    fn on_prepare(&self, _ctx: &ComponentContext) -> Result<(), ComponentError> {
        self.record("prepare");
        Ok(())
    }

    fn on_measure(
        &self,
        _ctx: &ComponentContext,
        _constraints: Constraints,
    ) -> Result<Size, ComponentError> {
        Ok(self.size)
    }

    fn on_mount(&self, _ctx: &ComponentContext, content: &MountContent) -> Result<(), ComponentError> {
        if let Some(alpha) = self.mount_alpha {
            content.set_alpha(alpha);
        }
        self.record("mount");
        Ok(())
    }

    fn on_bind(&self, _ctx: &ComponentContext, _content: &MountContent) -> Result<(), ComponentError> {
        self.record("bind");
        Ok(())
    }

    fn on_attached(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        self.record("attached");
        Ok(())
    }

    fn on_detached(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        self.record("detached");
        Ok(())
    }

    fn on_unbind(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        self.record("unbind");
        Ok(())
    }

    fn on_unmount(
        &self,
        _ctx: &ComponentContext,
        _content: &MountContent,
    ) -> Result<(), ComponentError> {
        self.record("unmount");
        Ok(())
    }

    fn working_ranges(&self) -> Vec<WorkingRangeSpec> {
        self.ranges.clone()
    }

    fn on_entered_range(&self, _ctx: &ComponentContext, name: &str) -> Result<(), ComponentError> {
        self.record(&format!("enter {name}"));
        Ok(())
    }

    fn on_exited_range(&self, _ctx: &ComponentContext, name: &str) -> Result<(), ComponentError> {
        self.record(&format!("exit {name}"));
        Ok(())
    }
}
