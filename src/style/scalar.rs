//! Length values: Scalar, Unit (px, %, auto).

use std::fmt;

use crate::geometry::Edges;

/// A length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Absolute pixels.
    Px,
    /// Percentage of the containing block dimension.
    Percent,
    /// Left to the layout algorithm.
    Auto,
}

/// A length with a unit, e.g. `10px`, `50%`, `auto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub value: f32,
    pub unit: Unit,
}

impl Scalar {
    /// Create a length in pixels.
    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Create a length as a percentage.
    pub fn percent(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// Create an auto length.
    pub fn auto() -> Self {
        Self {
            value: 0.0,
            unit: Unit::Auto,
        }
    }

    /// Returns `true` if this length is auto-sized.
    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }

    /// Resolve against a base dimension. `None` for `auto`.
    pub fn resolve(&self, base: f32) -> Option<f32> {
        match self.unit {
            Unit::Px => Some(self.value),
            Unit::Percent => Some(base * self.value / 100.0),
            Unit::Auto => None,
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::px(0.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            Unit::Auto => return write!(f, "auto"),
            Unit::Px => "px",
            Unit::Percent => "%",
        };
        if self.value.fract() == 0.0 {
            write!(f, "{}{suffix}", self.value as i64)
        } else {
            write!(f, "{}{suffix}", self.value)
        }
    }
}

/// Four-sided lengths (top, right, bottom, left) like margin or padding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScalarBox {
    pub top: Scalar,
    pub right: Scalar,
    pub bottom: Scalar,
    pub left: Scalar,
}

impl ScalarBox {
    /// Create a box with the same length on all four sides.
    pub fn all(v: Scalar) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Create a box with symmetric vertical and horizontal lengths.
    pub fn symmetric(vertical: Scalar, horizontal: Scalar) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create a box with explicit lengths for all four sides.
    pub fn new(top: Scalar, right: Scalar, bottom: Scalar, left: Scalar) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Resolve every side against `base`.
    ///
    /// Percentages on all four sides refer to the containing block's width,
    /// as in CSS. `auto` sides resolve to zero and negative results are kept;
    /// clamping is the box's job.
    pub fn resolve(&self, base: f32) -> Edges {
        Edges::new(
            self.top.resolve(base).unwrap_or(0.0),
            self.right.resolve(base).unwrap_or(0.0),
            self.bottom.resolve(base).unwrap_or(0.0),
            self.left.resolve(base).unwrap_or(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_px() {
        let s = Scalar::px(10.0);
        assert_eq!(s.unit, Unit::Px);
        assert!(!s.is_auto());
        assert_eq!(s.to_string(), "10px");
        assert_eq!(s.resolve(500.0), Some(10.0));
    }

    #[test]
    fn scalar_percent_resolves_against_base() {
        let s = Scalar::percent(25.0);
        assert_eq!(s.to_string(), "25%");
        assert_eq!(s.resolve(200.0), Some(50.0));
    }

    #[test]
    fn scalar_auto_does_not_resolve() {
        let s = Scalar::auto();
        assert!(s.is_auto());
        assert_eq!(s.to_string(), "auto");
        assert_eq!(s.resolve(200.0), None);
    }

    #[test]
    fn scalar_fractional_display() {
        assert_eq!(Scalar::px(2.5).to_string(), "2.5px");
        assert_eq!(Scalar::px(-3.0).to_string(), "-3px");
    }

    #[test]
    fn scalar_box_constructors() {
        let b = ScalarBox::symmetric(Scalar::px(1.0), Scalar::px(2.0));
        assert_eq!(b.top, Scalar::px(1.0));
        assert_eq!(b.right, Scalar::px(2.0));
        assert_eq!(b.bottom, Scalar::px(1.0));
        assert_eq!(b.left, Scalar::px(2.0));
        assert_eq!(ScalarBox::default(), ScalarBox::all(Scalar::px(0.0)));
    }

    #[test]
    fn scalar_box_resolve_mixed() {
        let b = ScalarBox::new(
            Scalar::px(4.0),
            Scalar::percent(10.0),
            Scalar::auto(),
            Scalar::px(-2.0),
        );
        assert_eq!(b.resolve(300.0), Edges::new(4.0, 30.0, 0.0, -2.0));
    }
}
