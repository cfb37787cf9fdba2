//! ComputedValues: the resolved style snapshot of one element.

use crate::style::properties::{parse_declarations, PropertyError};
use crate::style::scalar::{Scalar, ScalarBox};

/// Overflow behavior on one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Auto,
    Scroll,
}

/// The `clip` directive.
///
/// Controls how many clipping ancestors an element ignores, or overrides
/// clipping altogether.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clip {
    /// Clip normally (ignore zero ancestors).
    #[default]
    Auto,
    /// Cancel clipping for this element and its descendants.
    None,
    /// Clip this element's children even when nothing overflows.
    Always,
    /// Ignore the next N clipping ancestors.
    Number(u32),
}

impl Clip {
    /// Number of clipping ancestors to ignore; zero for the keyword forms.
    pub fn number(self) -> u32 {
        match self {
            Clip::Number(n) => n,
            _ => 0,
        }
    }
}

/// Computed values the positioning and clipping passes read.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedValues {
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub clip: Clip,

    pub width: Scalar,
    pub height: Scalar,

    pub margin: ScalarBox,
    pub padding: ScalarBox,
    pub border_width: ScalarBox,
}

impl Default for ComputedValues {
    fn default() -> Self {
        Self {
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            clip: Clip::Auto,
            width: Scalar::auto(),
            height: Scalar::auto(),
            margin: ScalarBox::default(),
            padding: ScalarBox::default(),
            border_width: ScalarBox::default(),
        }
    }
}

impl ComputedValues {
    /// Default values: visible overflow, `clip: auto`, auto size, zero edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an inline declaration block on top of the defaults.
    pub fn parse(declarations: &str) -> Result<Self, PropertyError> {
        parse_declarations(declarations)
    }

    /// Whether overflow is restricted on either axis.
    pub fn is_overflow_restricted(&self) -> bool {
        self.overflow_x != Overflow::Visible || self.overflow_y != Overflow::Visible
    }

    /// Set both overflow axes (builder).
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self.overflow_y = overflow;
        self
    }

    /// Set the clip directive (builder).
    pub fn with_clip(mut self, clip: Clip) -> Self {
        self.clip = clip;
        self
    }

    /// Set the width (builder).
    pub fn with_width(mut self, width: Scalar) -> Self {
        self.width = width;
        self
    }

    /// Set the height (builder).
    pub fn with_height(mut self, height: Scalar) -> Self {
        self.height = height;
        self
    }

    /// Set the margin (builder).
    pub fn with_margin(mut self, margin: ScalarBox) -> Self {
        self.margin = margin;
        self
    }

    /// Set the padding (builder).
    pub fn with_padding(mut self, padding: ScalarBox) -> Self {
        self.padding = padding;
        self
    }

    /// Set the border widths (builder).
    pub fn with_border_width(mut self, border_width: ScalarBox) -> Self {
        self.border_width = border_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let v = ComputedValues::new();
        assert_eq!(v.overflow_x, Overflow::Visible);
        assert_eq!(v.overflow_y, Overflow::Visible);
        assert_eq!(v.clip, Clip::Auto);
        assert!(v.width.is_auto());
        assert!(v.height.is_auto());
        assert_eq!(v.margin, ScalarBox::default());
        assert!(!v.is_overflow_restricted());
    }

    #[test]
    fn clip_number() {
        assert_eq!(Clip::Auto.number(), 0);
        assert_eq!(Clip::None.number(), 0);
        assert_eq!(Clip::Always.number(), 0);
        assert_eq!(Clip::Number(3).number(), 3);
    }

    #[test]
    fn overflow_restricted_on_single_axis() {
        let mut v = ComputedValues::new();
        v.overflow_y = Overflow::Scroll;
        assert!(v.is_overflow_restricted());
    }

    #[test]
    fn builders() {
        let v = ComputedValues::new()
            .with_overflow(Overflow::Hidden)
            .with_clip(Clip::Number(2))
            .with_height(Scalar::px(40.0))
            .with_margin(ScalarBox::all(Scalar::px(5.0)));
        assert_eq!(v.overflow_x, Overflow::Hidden);
        assert_eq!(v.overflow_y, Overflow::Hidden);
        assert_eq!(v.clip, Clip::Number(2));
        assert_eq!(v.height, Scalar::px(40.0));
        assert_eq!(v.margin.left, Scalar::px(5.0));
    }
}
