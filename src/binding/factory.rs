//! Constructing views and controllers by binding type.

use std::collections::HashMap;

use crate::dom::NodeId;

use super::builtin::{AttributeView, ClassView, ForView, ValueController, ValueView};
use super::view::{DataController, DataView};

/// Source of views and controllers for binding types.
pub trait BindingFactory {
    /// A new view of `type_name` for `element`, from the structural set when
    /// `structural` is true.
    fn instance_view(&self, type_name: &str, element: NodeId, structural: bool) -> Option<Box<dyn DataView>>;

    /// A new controller of `type_name` for `element`.
    fn instance_controller(&self, type_name: &str, element: NodeId) -> Option<Box<dyn DataController>>;

    /// Whether `type_name` names a structural view.
    fn is_structural(&self, type_name: &str) -> bool;
}

type ViewConstructor = Box<dyn Fn(NodeId) -> Box<dyn DataView>>;
type ControllerConstructor = Box<dyn Fn(NodeId) -> Box<dyn DataController>>;

// ---------------------------------------------------------------------------
// FactoryRegistry
// ---------------------------------------------------------------------------

/// Table of constructors keyed by binding type.
#[derive(Default)]
pub struct FactoryRegistry {
    views: HashMap<String, ViewConstructor>,
    structural_views: HashMap<String, ViewConstructor>,
    controllers: HashMap<String, ControllerConstructor>,
}

impl FactoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in bindings.
    ///
    /// Defaults:
    /// - `attr` view
    /// - `class` view
    /// - `value` view and controller
    /// - `for` structural view
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_view("attr", |element| Box::new(AttributeView::new(element)));
        registry.register_view("class", |element| Box::new(ClassView::new(element)));
        registry.register_view("value", |element| Box::new(ValueView::new(element)));
        registry.register_controller("value", |element| Box::new(ValueController::new(element)));
        registry.register_structural_view("for", |element| Box::new(ForView::new(element)));
        registry
    }

    /// Register a view type, replacing any existing one.
    pub fn register_view(
        &mut self,
        type_name: impl Into<String>,
        constructor: impl Fn(NodeId) -> Box<dyn DataView> + 'static,
    ) {
        self.views.insert(type_name.into(), Box::new(constructor));
    }

    /// Register a structural view type, replacing any existing one.
    pub fn register_structural_view(
        &mut self,
        type_name: impl Into<String>,
        constructor: impl Fn(NodeId) -> Box<dyn DataView> + 'static,
    ) {
        self.structural_views.insert(type_name.into(), Box::new(constructor));
    }

    /// Register a controller type, replacing any existing one.
    pub fn register_controller(
        &mut self,
        type_name: impl Into<String>,
        constructor: impl Fn(NodeId) -> Box<dyn DataController> + 'static,
    ) {
        self.controllers.insert(type_name.into(), Box::new(constructor));
    }
}

impl BindingFactory for FactoryRegistry {
    fn instance_view(&self, type_name: &str, element: NodeId, structural: bool) -> Option<Box<dyn DataView>> {
        let table = if structural { &self.structural_views } else { &self.views };
        table.get(type_name).map(|constructor| constructor(element))
    }

    fn instance_controller(&self, type_name: &str, element: NodeId) -> Option<Box<dyn DataController>> {
        self.controllers.get(type_name).map(|constructor| constructor(element))
    }

    fn is_structural(&self, type_name: &str) -> bool {
        self.structural_views.contains_key(type_name)
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut views: Vec<_> = self.views.keys().collect();
        let mut structural: Vec<_> = self.structural_views.keys().collect();
        let mut controllers: Vec<_> = self.controllers.keys().collect();
        views.sort();
        structural.sort();
        controllers.sort();
        f.debug_struct("FactoryRegistry")
            .field("views", &views)
            .field("structural_views", &structural)
            .field("controllers", &controllers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Dom, NodeData};

    fn element() -> NodeId {
        Dom::new().insert(NodeData::new("div"))
    }

    #[test]
    fn defaults() {
        let registry = FactoryRegistry::with_defaults();
        let element = element();

        assert!(registry.instance_view("attr", element, false).is_some());
        assert!(registry.instance_view("class", element, false).is_some());
        assert!(registry.instance_view("value", element, false).is_some());
        assert!(registry.instance_controller("value", element).is_some());
        assert!(registry.instance_controller("attr", element).is_none());

        assert!(registry.is_structural("for"));
        assert!(!registry.is_structural("value"));
        assert!(registry.instance_view("for", element, true).is_some());
        assert!(registry.instance_view("for", element, false).is_none());
        assert!(registry.instance_view("value", element, true).is_none());
    }

    #[test]
    fn constructed_views_know_their_element() {
        let registry = FactoryRegistry::with_defaults();
        let element = element();
        assert_eq!(registry.instance_view("attr", element, false).unwrap().element(), element);
    }

    #[test]
    fn debug_lists_types() {
        let registry = FactoryRegistry::with_defaults();
        insta::assert_snapshot!(
            format!("{registry:?}"),
            @r#"FactoryRegistry { views: ["attr", "class", "value"], structural_views: ["for"], controllers: ["value"] }"#
        );
    }

    #[test]
    fn empty_registry() {
        let registry = FactoryRegistry::new();
        assert!(registry.instance_view("attr", element(), false).is_none());
        assert!(!registry.is_structural("for"));
    }
}
