//! Scroll metrics: scrollable extent, scroll position and scrollbar sizes.
//!
//! The host's layout pass fills these in; the clipping pass compares the
//! scrollable extent against the client area to decide whether an ancestor
//! actually has overflow to clip.

use crate::geometry::Vector2f;

/// Scroll state of one element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll position (always >= 0).
    pub offset: Vector2f,
    /// Extent of the element's scrollable overflow, measured from the client
    /// area's top-left.
    pub content_size: Vector2f,
    /// Space taken by scrollbars: `x` is the vertical scrollbar's width,
    /// `y` the horizontal scrollbar's height.
    pub scrollbar_size: Vector2f,
}

impl ScrollMetrics {
    /// Metrics for content of the given extent, unscrolled, without scrollbars.
    pub fn new(content_size: Vector2f) -> Self {
        Self {
            content_size,
            ..Self::default()
        }
    }

    /// Set the scrollbar sizes (builder).
    pub fn with_scrollbars(mut self, vertical_width: f32, horizontal_height: f32) -> Self {
        self.scrollbar_size = Vector2f::new(vertical_width.max(0.0), horizontal_height.max(0.0));
        self
    }

    /// Width of the vertical scrollbar, zero when hidden.
    pub fn vertical_scrollbar_width(&self) -> f32 {
        self.scrollbar_size.x
    }

    /// Height of the horizontal scrollbar, zero when hidden.
    pub fn horizontal_scrollbar_height(&self) -> f32 {
        self.scrollbar_size.y
    }

    /// Largest valid scroll offset for a client area of `client_size`.
    pub fn max_scroll(&self, client_size: Vector2f) -> Vector2f {
        (self.content_size - client_size).max(Vector2f::ZERO)
    }

    /// Scroll to an absolute position, clamped to `[0, max_scroll]`.
    pub fn scroll_to(&mut self, target: Vector2f, client_size: Vector2f) {
        let max = self.max_scroll(client_size);
        self.offset = Vector2f::new(target.x.clamp(0.0, max.x), target.y.clamp(0.0, max.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let m = ScrollMetrics::default();
        assert_eq!(m.offset, Vector2f::ZERO);
        assert_eq!(m.vertical_scrollbar_width(), 0.0);
        assert_eq!(m.horizontal_scrollbar_height(), 0.0);
    }

    #[test]
    fn scrollbars_clamped() {
        let m = ScrollMetrics::new(Vector2f::new(10.0, 10.0)).with_scrollbars(12.0, -1.0);
        assert_eq!(m.vertical_scrollbar_width(), 12.0);
        assert_eq!(m.horizontal_scrollbar_height(), 0.0);
    }

    #[test]
    fn max_scroll() {
        let m = ScrollMetrics::new(Vector2f::new(100.0, 200.0));
        assert_eq!(m.max_scroll(Vector2f::new(40.0, 30.0)), Vector2f::new(60.0, 170.0));
        assert_eq!(m.max_scroll(Vector2f::new(400.0, 300.0)), Vector2f::ZERO);
    }

    #[test]
    fn scroll_to_clamps() {
        let mut m = ScrollMetrics::new(Vector2f::new(100.0, 200.0));
        let client = Vector2f::new(40.0, 30.0);
        m.scroll_to(Vector2f::new(20.0, 50.0), client);
        assert_eq!(m.offset, Vector2f::new(20.0, 50.0));
        m.scroll_to(Vector2f::new(999.0, -5.0), client);
        assert_eq!(m.offset, Vector2f::new(60.0, 0.0));
    }
}
