//! The data model: variables plus the views and controllers bound to them.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

use crate::dom::{Dom, NodeId};

use super::view::{DataController, DataView};

// ---------------------------------------------------------------------------
// Variables
// ---------------------------------------------------------------------------

/// String variables of a data model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set a variable. Returns whether its value changed.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.values.insert(name.into(), value.clone()) {
            Some(previous) => previous != value,
            None => true,
        }
    }

    /// Truthiness: defined, non-empty, not `"false"` and not `"0"`.
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !matches!(value, "" | "false" | "0"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ---------------------------------------------------------------------------
// DataModel
// ---------------------------------------------------------------------------

/// Shared state driving data views and read by data controllers.
///
/// Hosts own a model as `Rc<RefCell<DataModel>>` and hand elements a
/// [`DataModelHandle`].
#[derive(Debug, Default)]
pub struct DataModel {
    name: String,
    variables: Variables,
    dirty: BTreeSet<String>,
    views: Vec<Box<dyn DataView>>,
    controllers: Vec<Box<dyn DataController>>,
}

impl DataModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a model ready to be shared with elements.
    pub fn new_shared(name: impl Into<String>) -> Rc<RefCell<DataModel>> {
        Rc::new(RefCell::new(Self::new(name)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name)
    }

    /// Set a variable, marking it dirty when the value changes.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if self.variables.set(name.clone(), value) {
            self.dirty.insert(name);
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_variable_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    pub fn add_view(&mut self, view: Box<dyn DataView>) {
        self.views.push(view);
    }

    pub fn add_controller(&mut self, controller: Box<dyn DataController>) {
        self.controllers.push(controller);
    }

    pub fn views(&self) -> &[Box<dyn DataView>] {
        &self.views
    }

    pub fn controllers(&self) -> &[Box<dyn DataController>] {
        &self.controllers
    }

    /// Refresh every view when any variable changed, then clear the dirty set.
    ///
    /// Returns the number of views that modified their element.
    pub fn update_views(&mut self, dom: &mut Dom) -> usize {
        if self.dirty.is_empty() {
            return 0;
        }
        let mut changed = 0;
        for view in &mut self.views {
            if view.update(&self.variables, dom) {
                changed += 1;
            }
        }
        self.dirty.clear();
        changed
    }

    /// Let every controller push element state back into the variables.
    pub fn submit_controllers(&mut self, dom: &Dom) {
        let submissions: Vec<(String, String)> = self
            .controllers
            .iter_mut()
            .filter_map(|controller| controller.submit(dom))
            .collect();
        for (name, value) in submissions {
            self.set_variable(name, value);
        }
    }

    /// Drop the views and controllers bound to `element`.
    pub fn on_element_remove(&mut self, element: NodeId) {
        let views = self.views.len();
        let controllers = self.controllers.len();
        self.views.retain(|view| view.element() != element);
        self.controllers.retain(|controller| controller.element() != element);
        log::trace!(
            "model '{}': dropped {} views and {} controllers of removed element",
            self.name,
            views - self.views.len(),
            controllers - self.controllers.len()
        );
    }
}

// ---------------------------------------------------------------------------
// DataModelHandle
// ---------------------------------------------------------------------------

/// Non-owning reference from an element to its data model.
#[derive(Debug, Clone)]
pub struct DataModelHandle(Weak<RefCell<DataModel>>);

impl DataModelHandle {
    pub fn new(model: &Rc<RefCell<DataModel>>) -> Self {
        Self(Rc::downgrade(model))
    }

    /// The model, if the host still holds it.
    pub fn upgrade(&self) -> Option<Rc<RefCell<DataModel>>> {
        self.0.upgrade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        let mut variables = Variables::default();
        variables.set("yes", "1");
        variables.set("no", "false");
        variables.set("zero", "0");
        variables.set("empty", "");
        assert!(variables.is_truthy("yes"));
        assert!(!variables.is_truthy("no"));
        assert!(!variables.is_truthy("zero"));
        assert!(!variables.is_truthy("empty"));
        assert!(!variables.is_truthy("missing"));
    }

    #[test]
    fn set_variable_marks_dirty_on_change_only() {
        let mut model = DataModel::new("form");
        model.set_variable("name", "Ada");
        assert!(model.is_variable_dirty("name"));

        let mut dom = Dom::new();
        model.update_views(&mut dom);
        assert!(!model.is_dirty());

        model.set_variable("name", "Ada");
        assert!(!model.is_dirty());
        model.set_variable("name", "Grace");
        assert!(model.is_dirty());
        assert_eq!(model.variable("name"), Some("Grace"));
    }

    #[test]
    fn handle_does_not_keep_model_alive() {
        let model = DataModel::new_shared("scratch");
        let handle = DataModelHandle::new(&model);
        assert!(handle.upgrade().is_some());
        drop(model);
        assert!(handle.upgrade().is_none());
    }
}
