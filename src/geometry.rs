//! Core geometry types: Vector2f, Vector2i, Region, Edges.
//!
//! Layout works in floating-point pixels ([`Vector2f`], [`Edges`]); anything
//! handed to the render boundary is snapped to the device pixel grid and
//! expressed in integers ([`Vector2i`], [`Region`]).

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Vector2f
// ---------------------------------------------------------------------------

/// A 2D position or extent in (fractional) pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    /// The zero vector.
    pub const ZERO: Vector2f = Vector2f { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round both components to the nearest whole pixel.
    #[inline]
    pub fn round(self) -> Vector2f {
        Vector2f { x: self.x.round(), y: self.y.round() }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vector2f) -> Vector2f {
        Vector2f { x: self.x.max(other.x), y: self.y.max(other.y) }
    }
}

impl Add for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Vector2f {
        Vector2f { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Vector2f {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2f) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn sub(self, rhs: Vector2f) -> Vector2f {
        Vector2f { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl SubAssign for Vector2f {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2f) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn neg(self) -> Vector2f {
        Vector2f { x: -self.x, y: -self.y }
    }
}

impl Mul<f32> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn mul(self, rhs: f32) -> Vector2f {
        Vector2f { x: self.x * rhs, y: self.y * rhs }
    }
}

// ---------------------------------------------------------------------------
// Vector2i
// ---------------------------------------------------------------------------

/// A 2D position or extent in whole device pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

impl Vector2i {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes.
    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self { x: value, y: value }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vector2i) -> Vector2i {
        Vector2i { x: self.x.max(other.x), y: self.y.max(other.y) }
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vector2i) -> Vector2i {
        Vector2i { x: self.x.min(other.x), y: self.y.min(other.y) }
    }
}

/// Truncates toward zero. Out-of-range values saturate at the `i32` bounds
/// and NaN becomes zero.
impl From<Vector2f> for Vector2i {
    #[inline]
    fn from(v: Vector2f) -> Self {
        Vector2i { x: v.x as i32, y: v.y as i32 }
    }
}

impl Add for Vector2i {
    type Output = Vector2i;
    #[inline]
    fn add(self, rhs: Vector2i) -> Vector2i {
        Vector2i {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl Sub for Vector2i {
    type Output = Vector2i;
    #[inline]
    fn sub(self, rhs: Vector2i) -> Vector2i {
        Vector2i {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle in device pixels defined by origin and size.
///
/// This is the shape handed to the render boundary as a scissor rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a region from an origin and a size vector.
    #[inline]
    pub const fn from_origin_size(origin: Vector2i, size: Vector2i) -> Self {
        Self { x: origin.x, y: origin.y, width: size.x, height: size.y }
    }

    /// The right edge (exclusive): `x + width`, saturating.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The bottom edge (exclusive): `y + height`, saturating.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(self) -> Vector2i {
        Vector2i { x: self.x, y: self.y }
    }

    /// The dimensions.
    #[inline]
    pub const fn size(self) -> Vector2i {
        Vector2i { x: self.width, y: self.height }
    }

    /// Whether the region has zero area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersect two regions.
    ///
    /// The origin is the component-wise max of both origins and the size is
    /// clamped to zero, so disjoint regions produce a zero-size region anchored
    /// at the far top-left rather than [`Region::EMPTY`].
    #[inline]
    pub fn intersection(self, other: Region) -> Region {
        let top_left = self.origin().max(other.origin());
        let bottom_right = Vector2i::new(self.right(), self.bottom())
            .min(Vector2i::new(other.right(), other.bottom()));
        Region::from_origin_size(top_left, (bottom_right - top_left).max(Vector2i::splat(0)))
    }
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

/// Per-side widths of a box area (padding, border or margin).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    /// Zero on all sides.
    pub const ZERO: Edges = Edges { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create edges with explicit values for each side.
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Symmetric edges: `vertical` for top/bottom, `horizontal` for left/right.
    #[inline]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub fn width(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub fn height(self) -> f32 {
        self.top + self.bottom
    }

    /// The top-left corner offset `(left, top)`.
    #[inline]
    pub fn top_left(self) -> Vector2f {
        Vector2f::new(self.left, self.top)
    }

    /// Clamp every side to be non-negative.
    #[inline]
    pub fn clamp_non_negative(self) -> Edges {
        Edges {
            top: self.top.max(0.0),
            right: self.right.max(0.0),
            bottom: self.bottom.max(0.0),
            left: self.left.max(0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Pixel grid
// ---------------------------------------------------------------------------

/// Snap a rectangle to whole device pixels.
///
/// The origin and the far corner are rounded independently and the size is
/// recomputed from them, so adjacent rectangles stay adjacent after snapping.
pub fn snap_to_pixel_grid(origin: Vector2f, size: Vector2f) -> (Vector2f, Vector2f) {
    let bottom_right = (origin + size).round();
    let origin = origin.round();
    (origin, bottom_right - origin)
}

// ===========================================================================
// Tests
// ===========================================================================
