//! Tree operations: insert, remove, reparent, offsets, addresses.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::geometry::Vector2f;
use crate::layout::boxes::BoxArea;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The element tree, backed by a slotmap arena.
///
/// All elements live in a single `SlotMap`. Parent/child relationships are
/// stored in secondary maps so that removal is O(subtree size) and lookup is
/// O(1). Parents own their children; the parent link is a plain key.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a parentless element.
    ///
    /// If no root has been set yet, this element becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert an element as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(self.nodes.contains_key(parent), "parent node does not exist");
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Remove an element and all its descendants.
    ///
    /// Views and controllers bound to removed elements are dropped from their
    /// data models. Returns the `NodeData` of `id`, or `None` if it didn't
    /// exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let Some(data) = self.nodes.remove(current) else {
                continue;
            };
            if let Some(model) = data.data_model.as_ref().and_then(|handle| handle.upgrade()) {
                match model.try_borrow_mut() {
                    Ok(mut model) => model.on_element_remove(current),
                    Err(_) => log::debug!(
                        "data model busy while removing element {current:?}; bindings left in place"
                    ),
                }
            }
            if current == id {
                removed_root_data = Some(data);
            }
        }

        removed_root_data
    }

    /// Move `node` to become the last child of `new_parent`.
    ///
    /// The node keeps its subtree. Its explicit offset parent is cleared since
    /// it may no longer be an ancestor.
    ///
    /// # Panics
    ///
    /// Panics (debug) if either `node` or `new_parent` does not exist.
    pub fn reparent(&mut self, node: NodeId, new_parent: NodeId) {
        debug_assert!(self.nodes.contains_key(node), "node does not exist");
        debug_assert!(self.nodes.contains_key(new_parent), "new_parent does not exist");

        if let Some(old_parent) = self.parent.remove(node) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != node);
            }
        }

        self.parent.insert(node, new_parent);
        if let Some(siblings) = self.children.get_mut(new_parent) {
            siblings.push(node);
        }
        if let Some(data) = self.nodes.get_mut(node) {
            data.offset_parent = None;
        }
    }

    /// Get the tree parent of an element.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of an element. Empty if it has none or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(EMPTY_CHILDREN)
    }

    /// Ancestors of `id`, nearest first, ending at the root. Excludes `id`.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `ancestor` is a proper ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = id;
        while let Some(p) = self.parent(current) {
            if p == ancestor {
                return true;
            }
            current = p;
        }
        false
    }

    /// Immutable access to an element's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to an element's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The current root element, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Explicitly set the root element.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains an element with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    // -----------------------------------------------------------------------
    // Offsets
    // -----------------------------------------------------------------------

    /// The element `id` is positioned against.
    ///
    /// This is the explicit offset parent when one was set by a layout pass
    /// and it is still an ancestor, otherwise the tree parent. `None` at the
    /// root. The result is always a proper ancestor, so walking the chain
    /// terminates.
    pub fn offset_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes
            .get(id)?
            .offset_parent
            .filter(|p| self.is_ancestor(*p, id))
            .or_else(|| self.parent(id))
    }

    /// Place `id`'s border box at `offset` relative to `offset_parent`'s
    /// border box.
    ///
    /// An `offset_parent` that is not an ancestor of `id` is not recorded;
    /// the tree parent is used instead.
    pub fn set_offset(&mut self, id: NodeId, offset: Vector2f, offset_parent: NodeId) {
        let is_ancestor = self.is_ancestor(offset_parent, id);
        let Some(data) = self.nodes.get_mut(id) else {
            return;
        };
        if !is_ancestor {
            log::warn!(
                "offset parent {offset_parent:?} of {id:?} is not an ancestor; using the tree parent"
            );
        }
        data.relative_offset = offset;
        data.offset_parent = is_ancestor.then_some(offset_parent);
    }

    /// Absolute position of the top-left of `area` of element `id`.
    ///
    /// Accumulates relative offsets up the offset-parent chain, subtracting
    /// each offset parent's scroll position.
    pub fn absolute_offset(&self, id: NodeId, area: BoxArea) -> Option<Vector2f> {
        let data = self.nodes.get(id)?;
        let mut offset = data.relative_offset + data.layout_box.position(area);
        let mut current = id;
        while let Some(parent) = self.offset_parent(current) {
            let parent_data = &self.nodes[parent];
            offset += parent_data.relative_offset;
            offset -= parent_data.scroll.offset;
            current = parent;
        }
        Some(offset)
    }

    /// Human-readable path for diagnostics: `span.label < div#main < body`.
    pub fn address(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            let Some(data) = self.nodes.get(node) else {
                break;
            };
            parts.push(data.address_fragment());
            current = self.parent(node);
        }
        parts.join(" < ")
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}
