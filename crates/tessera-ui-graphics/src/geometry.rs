//! Geometric primitives: Size, Rect, EdgeInsets

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Axis-aligned rectangle stored as origin plus size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Builds a rect from its four edges.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Grows the rect outwards by the given insets.
    pub fn outset(&self, insets: EdgeInsets) -> Self {
        Self::from_ltrb(
            self.left() - insets.left,
            self.top() - insets.top,
            self.right() + insets.right,
            self.bottom() + insets.bottom,
        )
    }
}

/// Per-edge values, used for padding and touch expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltrb_round_trips_edges() {
        let rect = Rect::from_ltrb(10.0, 20.0, 30.0, 60.0);
        assert_eq!(rect.width, 20.0);
        assert_eq!(rect.height, 40.0);
        assert_eq!(rect.right(), 30.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn outset_expands_every_edge() {
        let rect = Rect::new(10.0, 10.0, 10.0, 10.0);
        let expanded = rect.outset(EdgeInsets::from_components(1.0, 2.0, 3.0, 4.0));
        assert_eq!(expanded, Rect::from_ltrb(9.0, 8.0, 23.0, 24.0));
    }
}
