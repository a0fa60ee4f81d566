//! Mount pass: reconciles mounted content with a [`LayoutState`].
//!
//! Items are kept in mount order (hosts before the units they contain).
//! Attach walks that order forwards; detach and unmount walk it backwards so
//! children always go before their host.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tessera_core::{
    with_perf_event, Dynamic, DynamicValue, ListenerHandle, LogEvent, PerfEventMarker,
};
use tessera_ui_graphics::Rect;

use crate::component::ComponentRef;
use crate::content::MountContent;
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::layout_state::{LayoutState, RenderTreeNode, RenderUnitId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountItemState {
    Unmounted,
    Mounted,
    Bound,
    Attached,
    Detached,
}

/// Counts reported by one mount pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountStats {
    pub mounted: usize,
    pub unmounted: usize,
    pub updated: usize,
}

/// Content mounted for one render unit.
pub struct MountItem {
    id: RenderUnitId,
    host: Option<RenderUnitId>,
    component: ComponentRef,
    content: MountContent,
    bounds: Rect,
    state: MountItemState,
    alpha: Option<f32>,
    dynamic_alpha: Option<DynamicValue<f32>>,
    saved_alpha: Option<f32>,
    alpha_listener: Option<(DynamicValue<f32>, ListenerHandle)>,
}

impl MountItem {
    fn new(unit: &RenderTreeNode, content: MountContent) -> Self {
        let mut item = Self {
            id: unit.id,
            host: unit.host,
            component: Rc::clone(&unit.component),
            content,
            bounds: Rect::ZERO,
            state: MountItemState::Unmounted,
            alpha: None,
            dynamic_alpha: None,
            saved_alpha: None,
            alpha_listener: None,
        };
        item.take_layout(unit);
        item
    }

    pub fn id(&self) -> RenderUnitId {
        self.id
    }

    pub fn host(&self) -> Option<RenderUnitId> {
        self.host
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    pub fn content(&self) -> &MountContent {
        &self.content
    }

    pub fn state(&self) -> MountItemState {
        self.state
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn left(&self) -> f32 {
        self.bounds.left()
    }

    pub fn top(&self) -> f32 {
        self.bounds.top()
    }

    pub fn right(&self) -> f32 {
        self.bounds.right()
    }

    pub fn bottom(&self) -> f32 {
        self.bounds.bottom()
    }

    pub fn is_attached(&self) -> bool {
        self.state == MountItemState::Attached
    }

    fn take_layout(&mut self, unit: &RenderTreeNode) {
        self.host = unit.host;
        self.bounds = unit.bounds;
        self.content.set_bounds(unit.bounds);
        self.content.set_touch_bounds(unit.touch_bounds);
    }

    fn attributes_differ(&self, unit: &RenderTreeNode) -> bool {
        let dynamic_differs = match (&self.dynamic_alpha, &unit.dynamic_alpha) {
            (Some(a), Some(b)) => !a.ptr_eq(b),
            (None, None) => false,
            _ => true,
        };
        dynamic_differs || self.alpha != unit.alpha
    }

    /// `on_mount`, view attributes, `on_bind`.
    fn mount(&mut self, ctx: &ComponentContext, unit: &RenderTreeNode) -> Result<(), ComponentError> {
        self.component.on_mount(ctx, &self.content)?;
        self.state = MountItemState::Mounted;
        self.apply_attributes(unit);
        self.component.on_bind(ctx, &self.content)?;
        self.state = MountItemState::Bound;
        Ok(())
    }

    fn attach(&mut self, ctx: &ComponentContext) -> Result<(), ComponentError> {
        if !matches!(self.state, MountItemState::Bound | MountItemState::Detached) {
            return Ok(());
        }
        self.component.on_attached(ctx, &self.content)?;
        self.state = MountItemState::Attached;
        self.content.with_nested_tree(|tree| tree.attach())?;
        Ok(())
    }

    fn detach(&mut self, ctx: &ComponentContext) -> Result<(), ComponentError> {
        if self.state != MountItemState::Attached {
            return Ok(());
        }
        self.content.with_nested_tree(|tree| tree.detach())?;
        self.component.on_detached(ctx, &self.content)?;
        self.state = MountItemState::Detached;
        Ok(())
    }

    /// Detach if needed, `on_unbind`, restore attributes, `on_unmount`.
    fn unmount(&mut self, ctx: &ComponentContext) -> Result<(), ComponentError> {
        self.detach(ctx)?;
        if self.state == MountItemState::Unmounted {
            return Ok(());
        }
        if matches!(self.state, MountItemState::Bound | MountItemState::Detached) {
            self.component.on_unbind(ctx, &self.content)?;
            self.state = MountItemState::Mounted;
        }
        self.unset_attributes();
        self.component.on_unmount(ctx, &self.content)?;
        self.state = MountItemState::Unmounted;
        Ok(())
    }

    fn apply_attributes(&mut self, unit: &RenderTreeNode) {
        self.alpha = unit.alpha;
        self.dynamic_alpha = unit.dynamic_alpha.clone();
        if unit.alpha.is_none() && unit.dynamic_alpha.is_none() {
            return;
        }

        self.saved_alpha = Some(self.content.alpha());
        if let Some(alpha) = unit.alpha {
            self.content.set_alpha(alpha);
        }
        if let Some(dynamic) = &unit.dynamic_alpha {
            self.content.set_alpha(dynamic.get());
            let target = self.content.clone();
            let handle = dynamic.add_listener(Box::new(move |alpha: &f32| target.set_alpha(*alpha)));
            self.alpha_listener = Some((dynamic.clone(), handle));
        }
    }

    fn unset_attributes(&mut self) {
        if let Some((dynamic, handle)) = self.alpha_listener.take() {
            dynamic.remove_listener(handle);
        }
        if let Some(saved) = self.saved_alpha.take() {
            self.content.set_alpha(saved);
        }
    }
}

impl fmt::Debug for MountItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountItem")
            .field("id", &self.id)
            .field("component", &self.component.simple_name())
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// Mounted items of one tree.
pub struct MountState {
    tree_id: u64,
    items: IndexMap<RenderUnitId, MountItem>,
    attached: bool,
    needs_remount: bool,
}

impl MountState {
    pub fn new(tree_id: u64) -> Self {
        Self {
            tree_id,
            items: IndexMap::new(),
            attached: false,
            needs_remount: true,
        }
    }

    pub fn item(&self, id: RenderUnitId) -> Option<&MountItem> {
        self.items.get(&id)
    }

    /// Items in mount order.
    pub fn items(&self) -> impl Iterator<Item = &MountItem> {
        self.items.values()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// True until the first mount pass and after `unmount_all_items`.
    pub fn needs_remount(&self) -> bool {
        self.needs_remount
    }

    /// Brings mounted content in line with `layout`.
    pub fn mount(
        &mut self,
        ctx: &ComponentContext,
        layout: &LayoutState,
    ) -> Result<MountStats, ComponentError> {
        let stats = with_perf_event(ctx.logger(), PerfEventMarker::Mount, || {
            self.reconcile(ctx, layout)
        })?;
        log::debug!(
            "mounted tree {}: {} mounted, {} unmounted, {} updated",
            self.tree_id,
            stats.mounted,
            stats.unmounted,
            stats.updated
        );
        ctx.logger().on_event(&LogEvent::Mounted {
            tree_id: self.tree_id,
            mounted: stats.mounted,
            unmounted: stats.unmounted,
            updated: stats.updated,
        });
        Ok(stats)
    }

    fn reconcile(
        &mut self,
        ctx: &ComponentContext,
        layout: &LayoutState,
    ) -> Result<MountStats, ComponentError> {
        let trace = ctx.config().debug_logging;
        let mut stats = MountStats::default();

        let stale: Vec<RenderUnitId> = self
            .items
            .iter()
            .rev()
            .filter(|(id, item)| match layout.render_unit(**id) {
                Some(unit) => unit.component.content_type() != item.content.content_type(),
                None => true,
            })
            .map(|(id, _)| *id)
            .collect();
        for id in stale {
            if let Some(item) = self.items.shift_remove(&id) {
                if trace {
                    log::trace!("unmount {:?} ({})", id, item.component.simple_name());
                }
                recycle(ctx, item)?;
                stats.unmounted += 1;
            }
        }

        for unit in layout.render_units() {
            if let Some(item) = self.items.get_mut(&unit.id) {
                item.take_layout(unit);
                let same = Rc::ptr_eq(&item.component, &unit.component)
                    || item.component.is_equivalent_to(unit.component.as_ref());
                if !same {
                    if trace {
                        log::trace!("remount {:?} ({})", unit.id, unit.component.simple_name());
                    }
                    item.unmount(ctx)?;
                    item.component = Rc::clone(&unit.component);
                    if let Err(err) = item.mount(ctx, unit) {
                        if let Some(item) = self.items.shift_remove(&unit.id) {
                            abandon(ctx, item);
                        }
                        return Err(err);
                    }
                    if self.attached {
                        item.attach(ctx)?;
                    }
                    stats.updated += 1;
                } else {
                    item.component = Rc::clone(&unit.component);
                    if item.attributes_differ(unit) {
                        item.unset_attributes();
                        item.apply_attributes(unit);
                        stats.updated += 1;
                    }
                }
                continue;
            }

            let content_type = unit.component.content_type();
            let pooled = ctx.pools().acquire(content_type);
            let content = match pooled {
                Some(content) => content,
                None => unit.component.create_mount_content(ctx),
            };
            if trace {
                log::trace!(
                    "mount {:?} ({}) content {}",
                    unit.id,
                    unit.component.simple_name(),
                    content.id()
                );
            }
            let mut item = MountItem::new(unit, content);
            if let Err(err) = item.mount(ctx, unit) {
                abandon(ctx, item);
                return Err(err);
            }
            // keep a bound item even if attaching fails so a later attach retries it
            let attached = if self.attached { item.attach(ctx) } else { Ok(()) };
            self.items.insert(unit.id, item);
            stats.mounted += 1;
            attached?;
        }

        let order = |id: &RenderUnitId| layout.position_of(*id).unwrap_or(usize::MAX);
        self.items.sort_by(|a, _, b, _| order(a).cmp(&order(b)));
        self.needs_remount = false;
        Ok(stats)
    }

    /// Calls `on_attached` on every bound item in mount order.
    ///
    /// A failing item does not stop the walk; the first error is returned
    /// once every other item had its turn. Items already attached are
    /// skipped, so calling this again retries only the ones that failed.
    pub fn attach(&mut self, ctx: &ComponentContext) -> Result<(), ComponentError> {
        self.attached = true;
        let mut first_error = None;
        for item in self.items.values_mut() {
            if let Err(err) = item.attach(ctx) {
                log::warn!("attach of {:?} failed: {err}", item.id);
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Calls `on_detached` on every attached item in reverse mount order.
    /// Failures are handled like in [`attach`](Self::attach).
    pub fn detach(&mut self, ctx: &ComponentContext) -> Result<(), ComponentError> {
        self.attached = false;
        let mut first_error = None;
        for item in self.items.values_mut().rev() {
            if let Err(err) = item.detach(ctx) {
                log::warn!("detach of {:?} failed: {err}", item.id);
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Unmounts every item, children first, returning content to the pools.
    pub fn unmount_all_items(&mut self, ctx: &ComponentContext) -> Result<(), ComponentError> {
        let count = self.items.len();
        while let Some((_, item)) = self.items.pop() {
            recycle(ctx, item)?;
        }
        self.needs_remount = true;
        ctx.logger().on_event(&LogEvent::UnmountedAll {
            tree_id: self.tree_id,
            count,
        });
        Ok(())
    }
}

/// Tears down an item whose mount failed part way and returns its content to
/// the pool if `on_mount` had completed. Errors from the teardown are logged
/// so the original failure reaches the caller.
fn abandon(ctx: &ComponentContext, mut item: MountItem) {
    let mounted = item.state != MountItemState::Unmounted;
    if let Err(err) = item.unmount(ctx) {
        log::warn!("teardown of {:?} after failed mount: {err}", item.id);
        return;
    }
    if mounted {
        let MountItem {
            component, content, ..
        } = item;
        ctx.pools().release(component.as_ref(), content);
    }
}

fn recycle(ctx: &ComponentContext, mut item: MountItem) -> Result<(), ComponentError> {
    item.unmount(ctx)?;
    let MountItem {
        component, content, ..
    } = item;
    ctx.pools().release(component.as_ref(), content);
    Ok(())
}

impl fmt::Debug for MountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountState")
            .field("tree_id", &self.tree_id)
            .field("items", &self.items.len())
            .field("attached", &self.attached)
            .field("needs_remount", &self.needs_remount)
            .finish()
    }
}
