//! Tree traversal and lookups by id, tag name and class name.

use std::collections::VecDeque;

use super::node::{NodeData, NodeId};
use super::tree::Dom;

/// Lazy breadth-first traversal over a subtree.
///
/// Yields `(NodeId, &NodeData)` in level order. Finite; once started it can
/// only run forward.
pub struct BreadthFirst<'a> {
    dom: &'a Dom,
    queue: VecDeque<NodeId>,
}

impl<'a> BreadthFirst<'a> {
    fn from_queue(dom: &'a Dom, queue: VecDeque<NodeId>) -> Self {
        Self { dom, queue }
    }
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = (NodeId, &'a NodeData);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.queue.pop_front() {
            let Some(data) = self.dom.get(current) else {
                continue;
            };
            self.queue.extend(self.dom.children(current).iter().copied());
            return Some((current, data));
        }
        None
    }
}

impl Dom {
    /// Breadth-first traversal of `root`'s subtree, `root` included.
    pub fn breadth_first(&self, root: NodeId) -> BreadthFirst<'_> {
        BreadthFirst::from_queue(self, VecDeque::from([root]))
    }

    /// Breadth-first traversal of `root`'s descendants, `root` excluded.
    pub fn descendants_breadth_first(&self, root: NodeId) -> BreadthFirst<'_> {
        BreadthFirst::from_queue(self, self.children(root).iter().copied().collect())
    }

    /// First element in breadth-first order (starting at `root` itself) whose
    /// id matches.
    pub fn get_element_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.breadth_first(root)
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// All descendants of `root` with the given tag, in breadth-first order.
    pub fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.query_descendants(root, |data| data.tag == tag)
    }

    /// All descendants of `root` with the given class, in breadth-first order.
    pub fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.query_descendants(root, |data| data.has_class(class))
    }

    /// All descendants of `root` matching an arbitrary predicate.
    pub fn query_descendants(&self, root: NodeId, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.descendants_breadth_first(root)
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }
}
