//! View and controller traits.

use std::fmt;

use crate::dom::{Dom, NodeId};

use super::model::{DataModel, Variables};

/// Pushes model state onto an element.
pub trait DataView: fmt::Debug {
    /// Bind to `element`. `modifier` is the attribute-name suffix, or the inner
    /// content for structural views. Returning `false` discards the view.
    fn initialize(
        &mut self,
        model: &mut DataModel,
        dom: &mut Dom,
        element: NodeId,
        expression: &str,
        modifier: &str,
    ) -> bool;

    /// Refresh the element from `variables`. Returns whether anything changed.
    fn update(&mut self, variables: &Variables, dom: &mut Dom) -> bool;

    /// The element this view is bound to.
    fn element(&self) -> NodeId;
}

/// Pulls element state back into the model.
pub trait DataController: fmt::Debug {
    /// Bind to `element`. Returning `false` discards the controller.
    fn initialize(
        &mut self,
        model: &mut DataModel,
        dom: &mut Dom,
        element: NodeId,
        expression: &str,
        modifier: &str,
    ) -> bool;

    /// The `(variable, value)` to write back, if the element changed.
    fn submit(&mut self, dom: &Dom) -> Option<(String, String)>;

    /// The element this controller is bound to.
    fn element(&self) -> NodeId;
}
