//! Measurement constraints

use tessera_ui_graphics::Size;

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Clamps a size into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Shrinks the maximums by the given amounts, keeping minimums loose.
    pub fn deflate(&self, horizontal: f32, vertical: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: 0.0,
            max_height: (self.max_height - vertical).max(0.0),
        }
    }
}

/// Size requested for a root: each axis either a fixed extent or unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeSpec {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl SizeSpec {
    /// Root is exactly `width` x `height`.
    pub fn exactly(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Root wraps its content on both axes.
    pub fn unspecified() -> Self {
        Self {
            width: None,
            height: None,
        }
    }

    /// Root is `height` tall and wraps its content horizontally.
    pub fn unbounded_width(height: f32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    /// Constraints a root is measured against. Negative extents count as zero.
    pub fn to_constraints(self) -> Constraints {
        Constraints::loose(
            self.width.map_or(f32::INFINITY, non_negative),
            self.height.map_or(f32::INFINITY, non_negative),
        )
    }

    /// Final root size: fixed axes win over the measured content.
    pub fn resolve(self, measured: Size) -> Size {
        Size::new(
            self.width.map_or(measured.width, non_negative),
            self.height.map_or(measured.height, non_negative),
        )
    }
}

fn non_negative(extent: f32) -> f32 {
    extent.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deflate_never_goes_negative() {
        let constraints = Constraints::loose(10.0, 10.0).deflate(20.0, 4.0);
        assert_eq!(constraints.max_width, 0.0);
        assert_eq!(constraints.max_height, 6.0);
    }

    #[test]
    fn size_spec_resolves_fixed_axes() {
        let spec = SizeSpec::unbounded_width(50.0);
        assert!(!spec.to_constraints().has_bounded_width());
        assert_eq!(spec.resolve(Size::new(300.0, 20.0)), Size::new(300.0, 50.0));
    }

    #[test]
    fn negative_extents_constrain_to_zero() {
        let spec = SizeSpec::exactly(-1.0, 30.0);
        let constraints = spec.to_constraints();
        assert_eq!(constraints.max_width, 0.0);
        assert_eq!(
            constraints.constrain(Size::new(12.0, 40.0)),
            Size::new(0.0, 30.0)
        );
        assert_eq!(spec.resolve(Size::new(12.0, 8.0)), Size::new(0.0, 30.0));
    }
}
