//! The CSS box model: content, padding, border and margin areas.

use crate::geometry::{Edges, Vector2f};

/// One of the four concentric areas of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxArea {
    Margin,
    Border,
    Padding,
    Content,
}

/// One side of a box area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxEdge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Resolved box geometry of an element.
///
/// Stores the content size and the widths of the three edge rings around it.
/// All values are non-negative, which keeps the areas nested:
/// margin ⊇ border ⊇ padding ⊇ content.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementBox {
    content: Vector2f,
    padding: Edges,
    border: Edges,
    margin: Edges,
}

impl ElementBox {
    /// A box with the given content size and no edges.
    pub fn new(content: Vector2f) -> Self {
        Self {
            content: content.max(Vector2f::ZERO),
            ..Self::default()
        }
    }

    /// Set the padding widths (builder).
    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding.clamp_non_negative();
        self
    }

    /// Set the border widths (builder).
    pub fn with_border(mut self, border: Edges) -> Self {
        self.border = border.clamp_non_negative();
        self
    }

    /// Set the margin widths (builder).
    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin.clamp_non_negative();
        self
    }

    /// Replace the content size.
    pub fn set_content(&mut self, content: Vector2f) {
        self.content = content.max(Vector2f::ZERO);
    }

    /// Widths of the ring that forms `area`. The content area has no ring.
    pub fn edges(&self, area: BoxArea) -> Edges {
        match area {
            BoxArea::Margin => self.margin,
            BoxArea::Border => self.border,
            BoxArea::Padding => self.padding,
            BoxArea::Content => Edges::ZERO,
        }
    }

    /// Width of one side of `area`'s ring.
    pub fn edge(&self, area: BoxArea, edge: BoxEdge) -> f32 {
        let edges = self.edges(area);
        match edge {
            BoxEdge::Top => edges.top,
            BoxEdge::Right => edges.right,
            BoxEdge::Bottom => edges.bottom,
            BoxEdge::Left => edges.left,
        }
    }

    /// Size of the content area.
    pub fn content_size(&self) -> Vector2f {
        self.content
    }

    /// Outer size of `area`.
    pub fn size(&self, area: BoxArea) -> Vector2f {
        let mut size = self.content;
        let rings: &[Edges] = match area {
            BoxArea::Content => &[],
            BoxArea::Padding => &[self.padding],
            BoxArea::Border => &[self.padding, self.border],
            BoxArea::Margin => &[self.padding, self.border, self.margin],
        };
        for ring in rings {
            size += Vector2f::new(ring.width(), ring.height());
        }
        size
    }

    /// Top-left of `area`, relative to the top-left of the border area.
    pub fn position(&self, area: BoxArea) -> Vector2f {
        match area {
            BoxArea::Margin => -self.margin.top_left(),
            BoxArea::Border => Vector2f::ZERO,
            BoxArea::Padding => self.border.top_left(),
            BoxArea::Content => self.border.top_left() + self.padding.top_left(),
        }
    }
}
