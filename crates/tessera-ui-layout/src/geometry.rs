use tessera_ui_graphics::{EdgeInsets, Rect};

/// Read access to a laid-out node's position, size and touch expansion.
///
/// Positions are relative to the parent node.
pub trait LayoutGeometry {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn touch_expansion_left(&self) -> f32 {
        0.0
    }

    fn touch_expansion_top(&self) -> f32 {
        0.0
    }

    fn touch_expansion_right(&self) -> f32 {
        0.0
    }

    fn touch_expansion_bottom(&self) -> f32 {
        0.0
    }

    fn touch_expansion(&self) -> EdgeInsets {
        EdgeInsets::from_components(
            self.touch_expansion_left(),
            self.touch_expansion_top(),
            self.touch_expansion_right(),
            self.touch_expansion_bottom(),
        )
    }
}

/// Absolute bounds of `node` given its parent's absolute origin.
pub fn absolute_bounds(node: &dyn LayoutGeometry, parent_x: f32, parent_y: f32) -> Rect {
    Rect::new(
        parent_x + node.x(),
        parent_y + node.y(),
        node.width(),
        node.height(),
    )
}

/// Absolute touch area of `node`, or `None` when it declares no expansion.
pub fn expanded_touch_bounds(
    node: &dyn LayoutGeometry,
    parent_x: f32,
    parent_y: f32,
) -> Option<Rect> {
    let expansion = node.touch_expansion();
    if expansion.is_zero() {
        return None;
    }
    Some(absolute_bounds(node, parent_x, parent_y).outset(expansion))
}
