//! Positioning an element inside its parent's content area.

use bitflags::bitflags;

use crate::dom::{Dom, NodeId};
use crate::geometry::Vector2f;
use crate::layout::boxes::{BoxArea, BoxEdge};
use crate::layout::builder::BoxBuilder;

bitflags! {
    /// Which corner of the containing block an offset is measured from.
    ///
    /// `TOP` and `LEFT` are the default and carry no bits.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct PositionAnchor: u8 {
        const BOTTOM = 1 << 0;
        const RIGHT = 1 << 1;

        const TOP_LEFT = 0;
        const TOP_RIGHT = Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

/// Errors from positioning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("element {0:?} does not exist")]
    MissingNode(NodeId),
    #[error("element {0:?} has no parent to position against")]
    NoParent(NodeId),
}

/// Convert an anchored offset into a top-left offset.
///
/// With `RIGHT`, `offset.x` is the distance between the element's right
/// margin edge and the containing block's right edge; `BOTTOM` likewise on
/// the vertical axis.
pub fn resolve_anchor_offset(
    containing_block: Vector2f,
    element_block: Vector2f,
    offset: Vector2f,
    anchor: PositionAnchor,
) -> Vector2f {
    let mut resolved = offset;
    if anchor.contains(PositionAnchor::RIGHT) {
        resolved.x = containing_block.x - (element_block.x + offset.x);
    }
    if anchor.contains(PositionAnchor::BOTTOM) {
        resolved.y = containing_block.y - (element_block.y + offset.y);
    }
    resolved
}

/// Build and store the box of `node` against its parent's content area.
///
/// Space taken by the parent's scrollbars is removed from the containing
/// block. An element with an explicit height gets the full containing block
/// height.
pub fn set_box(dom: &mut Dom, node: NodeId, builder: &impl BoxBuilder) -> Result<(), PositionError> {
    let parent = dom.parent(node).ok_or(PositionError::NoParent(node))?;
    let parent_data = dom.get(parent).ok_or(PositionError::MissingNode(parent))?;

    let mut containing_block = parent_data.layout_box.content_size();
    containing_block.x -= parent_data.scroll.vertical_scrollbar_width();
    containing_block.y -= parent_data.scroll.horizontal_scrollbar_height();

    let mut layout_box = builder.build_box(dom, node, containing_block);

    let data = dom.get_mut(node).ok_or(PositionError::MissingNode(node))?;
    if !data.computed.height.is_auto() {
        layout_box.set_content(Vector2f::new(layout_box.content_size().x, containing_block.y));
    }
    data.layout_box = layout_box;
    Ok(())
}

/// Size and place `node` at `offset` inside its parent's content area.
///
/// The offset is measured from the corner named by `anchor`. The element's
/// top and left margins still displace it. The parent becomes the element's
/// offset parent.
pub fn position_element(
    dom: &mut Dom,
    node: NodeId,
    offset: Vector2f,
    anchor: PositionAnchor,
    builder: &impl BoxBuilder,
) -> Result<(), PositionError> {
    if !dom.contains(node) {
        return Err(PositionError::MissingNode(node));
    }
    let parent = dom.parent(node).ok_or(PositionError::NoParent(node))?;

    set_box(dom, node, builder)?;

    let parent_box = dom.get(parent).ok_or(PositionError::MissingNode(parent))?.layout_box;
    let element_box = dom.get(node).ok_or(PositionError::MissingNode(node))?.layout_box;

    let resolved = resolve_anchor_offset(
        parent_box.size(BoxArea::Content),
        element_box.size(BoxArea::Margin),
        offset,
        anchor,
    );

    let mut relative_offset = parent_box.position(BoxArea::Content) + resolved;
    relative_offset.x += element_box.edge(BoxArea::Margin, BoxEdge::Left);
    relative_offset.y += element_box.edge(BoxArea::Margin, BoxEdge::Top);

    log::trace!("positioned {} at {relative_offset:?}", dom.address(node));
    dom.set_offset(node, relative_offset, parent);
    Ok(())
}
