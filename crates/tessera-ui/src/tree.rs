//! Entry point tying resolution, layout and mounting together.

use std::fmt;

use tessera_core::LogEvent;
use tessera_ui_layout::SizeSpec;

use crate::component::ComponentRef;
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::layout_state::LayoutState;
use crate::mount_state::{MountState, MountStats};
use crate::working_range::{VisibleWindow, WorkingRangeStatusHandler};

/// A root component with its current layout and mounted content.
///
/// Changing the root or the size spec lays the tree out again right away.
/// Once the tree has been mounted, later changes are mounted too.
pub struct ComponentTree {
    id: u64,
    context: ComponentContext,
    root: Option<ComponentRef>,
    size_spec: SizeSpec,
    layout_state: Option<LayoutState>,
    mount_state: MountState,
    working_range_status: WorkingRangeStatusHandler,
    mount_requested: bool,
    released: bool,
}

pub struct ComponentTreeBuilder {
    context: ComponentContext,
    root: Option<ComponentRef>,
    size_spec: SizeSpec,
}

impl ComponentTreeBuilder {
    pub fn size_spec(mut self, size_spec: SizeSpec) -> Self {
        self.size_spec = size_spec;
        self
    }

    /// Lays the root out against the size spec; mounting waits for
    /// [`ComponentTree::mount`] or [`ComponentTree::attach`].
    pub fn build(self) -> Result<ComponentTree, ComponentError> {
        let id = self.context.next_tree_id();
        let mut tree = ComponentTree {
            id,
            context: self.context,
            root: self.root,
            size_spec: self.size_spec,
            layout_state: None,
            mount_state: MountState::new(id),
            working_range_status: WorkingRangeStatusHandler::default(),
            mount_requested: false,
            released: false,
        };
        tree.calculate_layout()?;
        Ok(tree)
    }
}

impl ComponentTree {
    pub fn create(context: &ComponentContext, root: Option<ComponentRef>) -> ComponentTreeBuilder {
        ComponentTreeBuilder {
            context: context.clone(),
            root,
            size_spec: SizeSpec::unspecified(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn context(&self) -> &ComponentContext {
        &self.context
    }

    pub fn root(&self) -> Option<&ComponentRef> {
        self.root.as_ref()
    }

    pub fn size_spec(&self) -> SizeSpec {
        self.size_spec
    }

    pub fn layout_state(&self) -> Option<&LayoutState> {
        self.layout_state.as_ref()
    }

    pub fn mount_state(&self) -> &MountState {
        &self.mount_state
    }

    pub fn working_range_status(&self) -> &WorkingRangeStatusHandler {
        &self.working_range_status
    }

    pub fn is_attached(&self) -> bool {
        self.mount_state.is_attached()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn needs_remount(&self) -> bool {
        self.mount_state.needs_remount()
    }

    fn ensure_live(&self) -> Result<(), ComponentError> {
        if self.released {
            return Err(ComponentError::TreeReleased { tree_id: self.id });
        }
        Ok(())
    }

    fn calculate_layout(&mut self) -> Result<(), ComponentError> {
        let layout = LayoutState::calculate(
            &self.context,
            self.id,
            self.root.as_ref(),
            self.size_spec,
        )?;
        self.working_range_status.retain_registered(layout.working_ranges());
        self.layout_state = Some(layout);
        Ok(())
    }

    fn relayout(&mut self) -> Result<(), ComponentError> {
        self.calculate_layout()?;
        if self.mount_requested {
            self.mount()?;
        }
        Ok(())
    }

    /// Replaces the root. `None` empties the tree.
    pub fn set_root(&mut self, root: Option<ComponentRef>) -> Result<(), ComponentError> {
        self.ensure_live()?;
        self.root = root;
        self.relayout()
    }

    pub fn set_size_spec(&mut self, size_spec: SizeSpec) -> Result<(), ComponentError> {
        self.ensure_live()?;
        if self.size_spec == size_spec && self.layout_state.is_some() {
            return Ok(());
        }
        self.size_spec = size_spec;
        self.relayout()
    }

    /// Mounts the current layout.
    pub fn mount(&mut self) -> Result<MountStats, ComponentError> {
        self.ensure_live()?;
        if self.layout_state.is_none() {
            self.calculate_layout()?;
        }
        self.mount_requested = true;
        let Some(layout) = self.layout_state.as_ref() else {
            return Ok(MountStats::default());
        };
        self.mount_state.mount(&self.context, layout)
    }

    /// Mounts if needed, then attaches every mounted item.
    pub fn attach(&mut self) -> Result<(), ComponentError> {
        self.ensure_live()?;
        if self.mount_state.needs_remount() {
            self.mount()?;
        }
        self.mount_state.attach(&self.context)
    }

    pub fn detach(&mut self) -> Result<(), ComponentError> {
        self.ensure_live()?;
        self.mount_state.detach(&self.context)
    }

    /// Unmounts every item. The next [`mount`](Self::mount) mounts from scratch.
    pub fn unmount_all_items(&mut self) -> Result<(), ComponentError> {
        self.ensure_live()?;
        self.mount_state.unmount_all_items(&self.context)
    }

    /// Evaluates the working ranges of the current layout for the item at
    /// `position` and dispatches enter/exit callbacks.
    pub fn check_working_range_and_dispatch(
        &mut self,
        position: i32,
        first_visible: i32,
        last_visible: i32,
        first_fully_visible: i32,
        last_fully_visible: i32,
    ) -> Result<(), ComponentError> {
        self.ensure_live()?;
        let Some(layout) = self.layout_state.as_ref() else {
            return Ok(());
        };
        layout.working_ranges().dispatch(
            &self.context,
            &mut self.working_range_status,
            position,
            VisibleWindow {
                first_visible,
                last_visible,
                first_fully_visible,
                last_fully_visible,
            },
        )
    }

    /// Detaches and unmounts everything and drops the layout. Calling it
    /// again is a no-op.
    pub fn release(&mut self) -> Result<(), ComponentError> {
        if self.released {
            return Ok(());
        }
        self.mount_state.detach(&self.context)?;
        self.mount_state.unmount_all_items(&self.context)?;
        self.layout_state = None;
        self.root = None;
        self.working_range_status.clear();
        self.released = true;
        log::debug!("released tree {}", self.id);
        self.context
            .logger()
            .on_event(&LogEvent::Released { tree_id: self.id });
        Ok(())
    }
}

impl fmt::Debug for ComponentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentTree")
            .field("id", &self.id)
            .field("size_spec", &self.size_spec)
            .field("layout_state", &self.layout_state)
            .field("mount_state", &self.mount_state)
            .field("released", &self.released)
            .finish()
    }
}
