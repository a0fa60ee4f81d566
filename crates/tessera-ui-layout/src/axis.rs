use tessera_ui_graphics::Size;

/// Main axis of a stack container.
///
/// Column stacks children top to bottom, Row stacks them left to right. The
/// cross axis is the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
}

impl FlexDirection {
    #[inline]
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row)
    }

    /// Extent of `size` along the main axis.
    #[inline]
    pub fn main(self, size: Size) -> f32 {
        match self {
            FlexDirection::Column => size.height,
            FlexDirection::Row => size.width,
        }
    }

    /// Extent of `size` along the cross axis.
    #[inline]
    pub fn cross(self, size: Size) -> f32 {
        match self {
            FlexDirection::Column => size.width,
            FlexDirection::Row => size.height,
        }
    }

    /// Builds a size from main and cross extents.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            FlexDirection::Column => Size::new(cross, main),
            FlexDirection::Row => Size::new(main, cross),
        }
    }

    /// Builds an offset from main and cross positions.
    #[inline]
    pub fn offset(self, main: f32, cross: f32) -> (f32, f32) {
        match self {
            FlexDirection::Column => (cross, main),
            FlexDirection::Row => (main, cross),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_column_swap_axes() {
        let size = Size::new(30.0, 10.0);
        assert_eq!(FlexDirection::Row.main(size), 30.0);
        assert_eq!(FlexDirection::Column.main(size), 10.0);
        assert_eq!(FlexDirection::Column.size(10.0, 30.0), size);
        assert_eq!(FlexDirection::Row.offset(5.0, 2.0), (5.0, 2.0));
    }
}
