//! Layout calculation: resolve, measure, position and flatten into render units.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use tessera_core::collections::map::HashMap;
use tessera_core::hash::child_key;
use tessera_core::{with_perf_event, DynamicValue, LogEvent, PerfEventMarker};
use tessera_ui_graphics::{Rect, Size};
use tessera_ui_layout::{
    absolute_bounds, expanded_touch_bounds, Constraints, LayoutGeometry, SizeSpec,
};

use crate::component::ComponentRef;
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::node::{resolve, InternalNode, NodeKind};
use crate::working_range::WorkingRangeContainer;

static NEXT_LAYOUT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a mountable output across layout passes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderUnitId(pub u64);

impl RenderUnitId {
    /// Parent of every top-level unit.
    pub const ROOT: RenderUnitId = RenderUnitId(0);
}

impl fmt::Debug for RenderUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RenderUnitId({:016x})", self.0)
    }
}

/// One mountable entry of a laid-out tree.
#[derive(Clone)]
pub struct RenderTreeNode {
    pub id: RenderUnitId,
    /// Host this unit mounts into; `None` for the tree root.
    pub host: Option<RenderUnitId>,
    pub component: ComponentRef,
    /// Absolute bounds within the tree.
    pub bounds: Rect,
    pub touch_bounds: Option<Rect>,
    pub alpha: Option<f32>,
    pub dynamic_alpha: Option<DynamicValue<f32>>,
    pub is_host: bool,
}

impl fmt::Debug for RenderTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderTreeNode")
            .field("id", &self.id)
            .field("host", &self.host)
            .field("component", &self.component.simple_name())
            .field("bounds", &self.bounds)
            .field("is_host", &self.is_host)
            .finish()
    }
}

/// Result of one layout pass over a component tree.
pub struct LayoutState {
    id: u64,
    tree_id: u64,
    root: Rc<InternalNode>,
    size: Size,
    render_units: Vec<RenderTreeNode>,
    index: HashMap<RenderUnitId, usize>,
    working_ranges: WorkingRangeContainer,
}

impl LayoutState {
    /// Resolves `root`, measures it against `size_spec` and flattens the
    /// result in mount order (parents before children).
    pub fn calculate(
        ctx: &ComponentContext,
        tree_id: u64,
        root: Option<&ComponentRef>,
        size_spec: SizeSpec,
    ) -> Result<LayoutState, ComponentError> {
        with_perf_event(ctx.logger(), PerfEventMarker::LayoutCalculate, || {
            let root = resolve(ctx, root)?;
            let size = if ctx.is_null_layout(&root) {
                size_spec.resolve(Size::ZERO)
            } else {
                let measured = measure(ctx, &root, size_spec.to_constraints())?;
                let size = size_spec.resolve(measured);
                root.set_bounds(Rect::from_size(size));
                size
            };

            let mut collector = Collector {
                ctx,
                units: Vec::new(),
                working_ranges: WorkingRangeContainer::default(),
            };
            if !ctx.is_null_layout(&root) {
                let id = RenderUnitId(child_key(
                    RenderUnitId::ROOT.0,
                    discriminator(&root),
                    0,
                ));
                collector.collect(&root, id, None, 0.0, 0.0)?;
            }

            let index = collector
                .units
                .iter()
                .enumerate()
                .map(|(position, unit)| (unit.id, position))
                .collect();

            let state = LayoutState {
                id: NEXT_LAYOUT_ID.fetch_add(1, Ordering::Relaxed),
                tree_id,
                size,
                render_units: collector.units,
                working_ranges: collector.working_ranges,
                index,
                root,
            };
            log::debug!(
                "layout {} for tree {}: {} render units, {:?}",
                state.id,
                tree_id,
                state.render_units.len(),
                state.size
            );
            ctx.logger().on_event(&LogEvent::LayoutCalculated {
                tree_id,
                node_count: state.root.subtree_size(),
            });
            Ok(state)
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn tree_id(&self) -> u64 {
        self.tree_id
    }

    pub fn root(&self) -> &Rc<InternalNode> {
        &self.root
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn render_units(&self) -> &[RenderTreeNode] {
        &self.render_units
    }

    pub fn render_unit(&self, id: RenderUnitId) -> Option<&RenderTreeNode> {
        self.index.get(&id).map(|position| &self.render_units[*position])
    }

    /// Position of `id` in mount order.
    pub fn position_of(&self, id: RenderUnitId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn working_ranges(&self) -> &WorkingRangeContainer {
        &self.working_ranges
    }

    /// Absolute touch area for a node, `None` without touch expansion.
    pub fn touch_bounds(
        geometry: &dyn LayoutGeometry,
        parent_x: f32,
        parent_y: f32,
    ) -> Option<Rect> {
        expanded_touch_bounds(geometry, parent_x, parent_y)
    }
}

impl fmt::Debug for LayoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutState")
            .field("id", &self.id)
            .field("tree_id", &self.tree_id)
            .field("size", &self.size)
            .field("render_units", &self.render_units)
            .finish()
    }
}

fn discriminator(node: &InternalNode) -> &str {
    node.props()
        .key
        .as_deref()
        .unwrap_or_else(|| node.simple_name())
}

/// Resolves and measures `component` without flattening it, for components
/// that size themselves from their content.
pub(crate) fn measure_component(
    ctx: &ComponentContext,
    component: &ComponentRef,
    constraints: Constraints,
) -> Result<Size, ComponentError> {
    let root = resolve(ctx, Some(component))?;
    if ctx.is_null_layout(&root) {
        return Ok(Size::ZERO);
    }
    measure(ctx, &root, constraints)
}

fn measure(
    ctx: &ComponentContext,
    node: &InternalNode,
    constraints: Constraints,
) -> Result<Size, ComponentError> {
    let props = node.props();
    let size = match node.kind() {
        NodeKind::Null => Size::ZERO,
        NodeKind::Leaf => match (props.width, props.height, node.component()) {
            (Some(width), Some(height), _) => Size::new(width, height),
            (width, height, Some(component)) => {
                let mut inner = constraints;
                if let Some(width) = width {
                    inner.min_width = width;
                    inner.max_width = width;
                }
                if let Some(height) = height {
                    inner.min_height = height;
                    inner.max_height = height;
                }
                let measured = component.on_measure(ctx, inner)?;
                Size::new(
                    width.unwrap_or(measured.width),
                    height.unwrap_or(measured.height),
                )
            }
            (_, _, None) => Size::ZERO,
        },
        NodeKind::Container(direction) => {
            let padding = node.padding();
            let available = Constraints::loose(
                props.width.unwrap_or(constraints.max_width),
                props.height.unwrap_or(constraints.max_height),
            )
            .deflate(padding.horizontal_sum(), padding.vertical_sum());
            // children are unbounded along the main axis
            let child_constraints = if direction.is_row() {
                Constraints::loose(f32::INFINITY, available.max_height)
            } else {
                Constraints::loose(available.max_width, f32::INFINITY)
            };

            let mut main = 0.0_f32;
            let mut cross = 0.0_f32;
            for child in node.children() {
                let child_size = measure(ctx, child, child_constraints)?;
                let (dx, dy) = direction.offset(main, 0.0);
                child.set_bounds(Rect::new(
                    padding.left + dx,
                    padding.top + dy,
                    child_size.width,
                    child_size.height,
                ));
                main += direction.main(child_size);
                cross = cross.max(direction.cross(child_size));
            }
            let content = direction.size(main, cross);
            Size::new(
                props
                    .width
                    .unwrap_or(content.width + padding.horizontal_sum()),
                props
                    .height
                    .unwrap_or(content.height + padding.vertical_sum()),
            )
        }
    };
    Ok(constraints.constrain(size))
}

struct Collector<'a> {
    ctx: &'a ComponentContext,
    units: Vec<RenderTreeNode>,
    working_ranges: WorkingRangeContainer,
}

impl Collector<'_> {
    fn collect(
        &mut self,
        node: &InternalNode,
        id: RenderUnitId,
        host: Option<RenderUnitId>,
        parent_x: f32,
        parent_y: f32,
    ) -> Result<(), ComponentError> {
        let bounds = absolute_bounds(node, parent_x, parent_y);
        let mut child_host = host;

        if let Some(component) = node.component() {
            if node.is_mountable() {
                if node.kind() == NodeKind::Leaf {
                    component.on_bounds_defined(self.ctx, bounds)?;
                }
                let is_host = matches!(node.kind(), NodeKind::Container(_));
                self.units.push(RenderTreeNode {
                    id,
                    host,
                    component: Rc::clone(component),
                    bounds,
                    touch_bounds: LayoutState::touch_bounds(node, parent_x, parent_y),
                    alpha: node.props().alpha,
                    dynamic_alpha: node.props().dynamic_alpha.clone(),
                    is_host,
                });
                if is_host {
                    child_host = Some(id);
                }
            }
            for spec in component.working_ranges() {
                self.working_ranges.register(spec, id, Rc::clone(component));
            }
        }

        let mut seen: HashMap<&str, usize> = HashMap::default();
        for child in node.children() {
            let name = discriminator(child);
            let slot = seen.entry(name).or_insert(0);
            let child_id = RenderUnitId(child_key(id.0, name, *slot));
            *slot += 1;
            self.collect(child, child_id, child_host, bounds.x, bounds.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/layout_state_tests.rs"]
mod tests;
