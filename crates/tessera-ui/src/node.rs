//! Internal layout nodes and component resolution.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;
use tessera_ui_graphics::{EdgeInsets, Rect};
use tessera_ui_layout::{FlexDirection, LayoutGeometry};

use crate::component::{ComponentRef, Resolution};
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::props::CommonProps;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Renders nothing.
    Null,
    Container(FlexDirection),
    Leaf,
}

pub type NodeChildren = SmallVec<[Rc<InternalNode>; 4]>;

/// A resolved component with its measured bounds.
///
/// Bounds are relative to the parent node and are written by the layout pass
/// after resolution.
pub struct InternalNode {
    component: Option<ComponentRef>,
    kind: NodeKind,
    padding: EdgeInsets,
    props: CommonProps,
    children: NodeChildren,
    bounds: Cell<Rect>,
}

impl InternalNode {
    pub(crate) fn null() -> Self {
        Self {
            component: None,
            kind: NodeKind::Null,
            padding: EdgeInsets::default(),
            props: CommonProps::default(),
            children: NodeChildren::new(),
            bounds: Cell::new(Rect::ZERO),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn component(&self) -> Option<&ComponentRef> {
        self.component.as_ref()
    }

    pub fn simple_name(&self) -> &'static str {
        self.component
            .as_ref()
            .map_or("NullLayout", |component| component.simple_name())
    }

    pub fn props(&self) -> &CommonProps {
        &self.props
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_at(&self, index: usize) -> Option<&Rc<InternalNode>> {
        self.children.get(index)
    }

    pub fn children(&self) -> impl Iterator<Item = &Rc<InternalNode>> {
        self.children.iter()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    pub(crate) fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }

    /// Leaves always mount; containers only when they carry view attributes.
    pub fn is_mountable(&self) -> bool {
        match self.kind {
            NodeKind::Null => false,
            NodeKind::Leaf => true,
            NodeKind::Container(_) => self.props.has_view_attributes(),
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.subtree_size())
            .sum::<usize>()
    }
}

impl LayoutGeometry for InternalNode {
    fn x(&self) -> f32 {
        self.bounds.get().x
    }

    fn y(&self) -> f32 {
        self.bounds.get().y
    }

    fn width(&self) -> f32 {
        self.bounds.get().width
    }

    fn height(&self) -> f32 {
        self.bounds.get().height
    }

    fn touch_expansion_left(&self) -> f32 {
        self.props.touch_expansion.left
    }

    fn touch_expansion_top(&self) -> f32 {
        self.props.touch_expansion.top
    }

    fn touch_expansion_right(&self) -> f32 {
        self.props.touch_expansion.right
    }

    fn touch_expansion_bottom(&self) -> f32 {
        self.props.touch_expansion.bottom
    }
}

impl fmt::Debug for InternalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternalNode")
            .field("component", &self.simple_name())
            .field("kind", &self.kind)
            .field("bounds", &self.bounds.get())
            .field("children", &self.children)
            .finish()
    }
}

/// Resolves `component` into a node tree.
///
/// An absent component, or one that renders nothing, yields the context's
/// null layout.
pub fn resolve(
    ctx: &ComponentContext,
    component: Option<&ComponentRef>,
) -> Result<Rc<InternalNode>, ComponentError> {
    let Some(component) = component else {
        return Ok(ctx.null_layout());
    };
    Ok(match resolve_node(ctx, component)? {
        Some(node) => Rc::new(node),
        None => ctx.null_layout(),
    })
}

fn resolve_node(
    ctx: &ComponentContext,
    component: &ComponentRef,
) -> Result<Option<InternalNode>, ComponentError> {
    match component.on_create_layout(ctx)? {
        Resolution::Null => Ok(None),
        Resolution::Delegate(delegate) => {
            let Some(mut node) = resolve_node(ctx, &delegate)? else {
                return Ok(None);
            };
            node.props = component.common_props().merged_over(&node.props);
            Ok(Some(node))
        }
        Resolution::Container(spec) => {
            let mut children = NodeChildren::new();
            for child in &spec.children {
                if let Some(node) = resolve_node(ctx, child)? {
                    children.push(Rc::new(node));
                }
            }
            Ok(Some(InternalNode {
                component: Some(Rc::clone(component)),
                kind: NodeKind::Container(spec.direction),
                padding: spec.padding,
                props: component.common_props().clone(),
                children,
                bounds: Cell::new(Rect::ZERO),
            }))
        }
        Resolution::Leaf => {
            component.on_prepare(ctx)?;
            Ok(Some(InternalNode {
                component: Some(Rc::clone(component)),
                kind: NodeKind::Leaf,
                padding: EdgeInsets::default(),
                props: component.common_props().clone(),
                children: NodeChildren::new(),
                bounds: Cell::new(Rect::ZERO),
            }))
        }
    }
}
