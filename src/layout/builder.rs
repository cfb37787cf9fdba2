//! Box building: computed values + containing block → [`ElementBox`].

use crate::dom::{Dom, NodeId};
use crate::geometry::Vector2f;
use crate::layout::boxes::ElementBox;

/// Builds an element's box from its computed values.
///
/// This is the seam to the host's full layout algorithm. The positioner only
/// needs a box for a given containing block; how auto sizes are resolved is
/// up to the implementation.
pub trait BoxBuilder {
    /// Build the box of `node` inside a containing block of the given size.
    fn build_box(&self, dom: &Dom, node: NodeId, containing_block: Vector2f) -> ElementBox;
}

/// Block-level box builder driven purely by computed values.
///
/// - margin, border and padding resolve against the containing block width;
/// - an explicit width resolves against the containing block width, `auto`
///   fills the containing block minus the horizontal edges;
/// - an explicit height resolves against the containing block height, `auto`
///   yields zero since content height needs a flow pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleBoxBuilder;

impl BoxBuilder for StyleBoxBuilder {
    fn build_box(&self, dom: &Dom, node: NodeId, containing_block: Vector2f) -> ElementBox {
        let Some(data) = dom.get(node) else {
            return ElementBox::default();
        };
        let computed = &data.computed;

        let margin = computed.margin.resolve(containing_block.x);
        let border = computed.border_width.resolve(containing_block.x);
        let padding = computed.padding.resolve(containing_block.x);

        let width = computed.width.resolve(containing_block.x).unwrap_or_else(|| {
            containing_block.x - margin.width() - border.width() - padding.width()
        });
        let height = computed.height.resolve(containing_block.y).unwrap_or(0.0);

        ElementBox::new(Vector2f::new(width, height))
            .with_padding(padding)
            .with_border(border)
            .with_margin(margin)
    }
}

/// Build `node`'s box with `builder` without storing it.
pub fn build_box(dom: &Dom, node: NodeId, containing_block: Vector2f, builder: &impl BoxBuilder) -> ElementBox {
    builder.build_box(dom, node, containing_block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeData;
    use crate::geometry::Edges;
    use crate::layout::boxes::BoxArea;
    use crate::style::ComputedValues;
    use pretty_assertions::assert_eq;

    fn single(declarations: &str) -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let node = dom.insert(NodeData::new("div").with_computed(ComputedValues::parse(declarations).unwrap()));
        (dom, node)
    }

    #[test]
    fn auto_width_fills_containing_block() {
        let (dom, node) = single("margin: 0 10px; padding: 5px; border-width: 1px");
        let b = build_box(&dom, node, Vector2f::new(200.0, 100.0), &StyleBoxBuilder);
        assert_eq!(b.content_size(), Vector2f::new(200.0 - 20.0 - 2.0 - 10.0, 0.0));
        assert_eq!(b.size(BoxArea::Margin).x, 200.0);
        assert_eq!(b.edges(BoxArea::Margin), Edges::symmetric(0.0, 10.0));
    }

    #[test]
    fn explicit_sizes() {
        let (dom, node) = single("width: 50%; height: 25%");
        let b = StyleBoxBuilder.build_box(&dom, node, Vector2f::new(200.0, 80.0));
        assert_eq!(b.content_size(), Vector2f::new(100.0, 20.0));
    }

    #[test]
    fn percentage_edges_use_width() {
        let (dom, node) = single("width: 10px; padding: 10%");
        let b = StyleBoxBuilder.build_box(&dom, node, Vector2f::new(300.0, 50.0));
        assert_eq!(b.edges(BoxArea::Padding), Edges::all(30.0));
    }

    #[test]
    fn overconstrained_auto_width_clamps_to_zero() {
        let (dom, node) = single("margin: 100px");
        let b = StyleBoxBuilder.build_box(&dom, node, Vector2f::new(50.0, 50.0));
        assert_eq!(b.content_size().x, 0.0);
    }

    #[test]
    fn missing_node_builds_empty_box() {
        let (mut dom, node) = single("");
        dom.remove(node);
        assert_eq!(StyleBoxBuilder.build_box(&dom, node, Vector2f::new(1.0, 1.0)), ElementBox::default());
    }
}
