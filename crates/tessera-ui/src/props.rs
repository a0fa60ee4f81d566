//! Framework-level props shared by every component, and required-prop checks
//! used by builders.

use std::fmt;

use tessera_core::DynamicValue;
use tessera_ui_graphics::EdgeInsets;

use crate::error::BuildError;

/// Props any component accepts regardless of its own behaviour.
///
/// Alpha is a view attribute: when set, it overrides whatever the component
/// applies to its content during mount, and the content's own value comes
/// back on unmount.
#[derive(Clone, Default)]
pub struct CommonProps {
    pub key: Option<String>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub alpha: Option<f32>,
    pub dynamic_alpha: Option<DynamicValue<f32>>,
    pub touch_expansion: EdgeInsets,
}

impl CommonProps {
    pub fn has_view_attributes(&self) -> bool {
        self.alpha.is_some() || self.dynamic_alpha.is_some()
    }

    /// `self` layered over `base`: every value set here wins.
    pub fn merged_over(&self, base: &CommonProps) -> CommonProps {
        let touch_expansion = if self.touch_expansion.is_zero() {
            base.touch_expansion
        } else {
            self.touch_expansion
        };
        CommonProps {
            key: self.key.clone().or_else(|| base.key.clone()),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            alpha: self.alpha.or(base.alpha),
            dynamic_alpha: self
                .dynamic_alpha
                .clone()
                .or_else(|| base.dynamic_alpha.clone()),
            touch_expansion,
        }
    }
}

impl PartialEq for CommonProps {
    fn eq(&self, other: &Self) -> bool {
        let same_dynamic = match (&self.dynamic_alpha, &other.dynamic_alpha) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        };
        same_dynamic
            && self.key == other.key
            && self.width == other.width
            && self.height == other.height
            && self.alpha == other.alpha
            && self.touch_expansion == other.touch_expansion
    }
}

impl fmt::Debug for CommonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommonProps")
            .field("key", &self.key)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("alpha", &self.alpha)
            .field("dynamic_alpha", &self.dynamic_alpha.is_some())
            .field("touch_expansion", &self.touch_expansion)
            .finish()
    }
}

/// Fluent setters for [`CommonProps`], available on every builder.
pub trait CommonPropsBuilder: Sized {
    fn common_props_mut(&mut self) -> &mut CommonProps;

    fn key(mut self, key: impl Into<String>) -> Self {
        self.common_props_mut().key = Some(key.into());
        self
    }

    fn width(mut self, width: f32) -> Self {
        self.common_props_mut().width = Some(width);
        self
    }

    fn height(mut self, height: f32) -> Self {
        self.common_props_mut().height = Some(height);
        self
    }

    fn alpha(mut self, alpha: f32) -> Self {
        self.common_props_mut().alpha = Some(alpha);
        self
    }

    fn dynamic_alpha(mut self, alpha: DynamicValue<f32>) -> Self {
        self.common_props_mut().dynamic_alpha = Some(alpha);
        self
    }

    fn touch_expansion(mut self, insets: EdgeInsets) -> Self {
        self.common_props_mut().touch_expansion = insets;
        self
    }
}

/// Tracks which mandatory props a builder has received.
#[derive(Clone, Debug)]
pub struct RequiredProps {
    component: &'static str,
    names: &'static [&'static str],
    supplied: u64,
}

impl RequiredProps {
    /// `names` lists the mandatory props in declaration order (at most 64).
    pub fn new(component: &'static str, names: &'static [&'static str]) -> Self {
        debug_assert!(names.len() <= 64);
        Self {
            component,
            names,
            supplied: 0,
        }
    }

    /// Marks the prop at `index` in `names` as supplied.
    pub fn mark(&mut self, index: usize) {
        self.supplied |= 1u64 << index;
    }

    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }

    fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names
            .iter()
            .enumerate()
            .filter(move |(index, _)| (self.supplied & (1u64 << *index)) == 0)
            .map(|(_, name)| *name)
    }

    pub fn check(&self) -> Result<(), BuildError> {
        let props: Vec<&'static str> = self.missing().collect();
        if props.is_empty() {
            Ok(())
        } else {
            Err(BuildError::MissingRequiredProps {
                component: self.component,
                props,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_props_are_named_in_order() {
        let mut required = RequiredProps::new("Sample", &["first", "second", "third"]);
        required.mark(1);
        let err = required.check().expect_err("two props missing");
        let message = err.to_string();
        assert!(message.contains("[first, third]"), "{message}");
        assert!(message.starts_with("Sample:"));
    }

    #[test]
    fn complete_props_pass() {
        let mut required = RequiredProps::new("Sample", &["only"]);
        assert!(!required.is_complete());
        required.mark(0);
        assert!(required.check().is_ok());
    }

    #[test]
    fn merged_props_prefer_outer_values() {
        let outer = CommonProps {
            alpha: Some(0.2),
            ..CommonProps::default()
        };
        let inner = CommonProps {
            alpha: Some(0.9),
            width: Some(40.0),
            ..CommonProps::default()
        };
        let merged = outer.merged_over(&inner);
        assert_eq!(merged.alpha, Some(0.2));
        assert_eq!(merged.width, Some(40.0));
    }
}
