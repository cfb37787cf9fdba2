//! Built-in views and controllers.
//!
//! Expressions are plain variable names. Initialization fails when the
//! variable is not defined in the model.

use crate::dom::{Dom, NodeId};

use super::model::{DataModel, Variables};
use super::view::{DataController, DataView};

fn variable_name(model: &DataModel, expression: &str) -> Option<String> {
    let name = expression.trim();
    model.variables().contains(name).then(|| name.to_owned())
}

/// Write `value` to `attribute` on `element`. Returns whether it changed.
fn sync_attribute(dom: &mut Dom, element: NodeId, attribute: &str, value: Option<&str>) -> bool {
    let Some(data) = dom.get_mut(element) else {
        return false;
    };
    let value = value.unwrap_or_default();
    if data.attributes.get(attribute) == Some(value) {
        return false;
    }
    data.attributes.set(attribute, value);
    true
}

// ---------------------------------------------------------------------------
// data-attr-<name>
// ---------------------------------------------------------------------------

/// Mirrors a variable into the attribute named by the modifier.
#[derive(Debug)]
pub struct AttributeView {
    element: NodeId,
    variable: String,
    attribute: String,
}

impl AttributeView {
    pub fn new(element: NodeId) -> Self {
        Self {
            element,
            variable: String::new(),
            attribute: String::new(),
        }
    }
}

impl DataView for AttributeView {
    fn initialize(
        &mut self,
        model: &mut DataModel,
        dom: &mut Dom,
        element: NodeId,
        expression: &str,
        modifier: &str,
    ) -> bool {
        if modifier.is_empty() {
            return false;
        }
        let Some(variable) = variable_name(model, expression) else {
            return false;
        };
        self.element = element;
        self.attribute = modifier.to_owned();
        self.variable = variable;
        self.update(model.variables(), dom);
        true
    }

    fn update(&mut self, variables: &Variables, dom: &mut Dom) -> bool {
        sync_attribute(dom, self.element, &self.attribute, variables.get(&self.variable))
    }

    fn element(&self) -> NodeId {
        self.element
    }
}

// ---------------------------------------------------------------------------
// data-class-<name>
// ---------------------------------------------------------------------------

/// Toggles the class named by the modifier on variable truthiness.
#[derive(Debug)]
pub struct ClassView {
    element: NodeId,
    variable: String,
    class: String,
}

impl ClassView {
    pub fn new(element: NodeId) -> Self {
        Self {
            element,
            variable: String::new(),
            class: String::new(),
        }
    }
}

impl DataView for ClassView {
    fn initialize(
        &mut self,
        model: &mut DataModel,
        dom: &mut Dom,
        element: NodeId,
        expression: &str,
        modifier: &str,
    ) -> bool {
        if modifier.is_empty() {
            return false;
        }
        let Some(variable) = variable_name(model, expression) else {
            return false;
        };
        self.element = element;
        self.class = modifier.to_owned();
        self.variable = variable;
        self.update(model.variables(), dom);
        true
    }

    fn update(&mut self, variables: &Variables, dom: &mut Dom) -> bool {
        let Some(data) = dom.get_mut(self.element) else {
            return false;
        };
        let enabled = variables.is_truthy(&self.variable);
        if data.has_class(&self.class) == enabled {
            return false;
        }
        data.set_class(&self.class, enabled);
        true
    }

    fn element(&self) -> NodeId {
        self.element
    }
}

// ---------------------------------------------------------------------------
// data-value
// ---------------------------------------------------------------------------

const VALUE_ATTRIBUTE: &str = "value";

/// Writes a variable to the element's `value` attribute.
#[derive(Debug)]
pub struct ValueView {
    element: NodeId,
    variable: String,
}

impl ValueView {
    pub fn new(element: NodeId) -> Self {
        Self {
            element,
            variable: String::new(),
        }
    }
}

impl DataView for ValueView {
    fn initialize(
        &mut self,
        model: &mut DataModel,
        dom: &mut Dom,
        element: NodeId,
        expression: &str,
        _modifier: &str,
    ) -> bool {
        let Some(variable) = variable_name(model, expression) else {
            return false;
        };
        self.element = element;
        self.variable = variable;
        self.update(model.variables(), dom);
        true
    }

    fn update(&mut self, variables: &Variables, dom: &mut Dom) -> bool {
        sync_attribute(dom, self.element, VALUE_ATTRIBUTE, variables.get(&self.variable))
    }

    fn element(&self) -> NodeId {
        self.element
    }
}

/// Copies the element's `value` attribute back into a variable.
#[derive(Debug)]
pub struct ValueController {
    element: NodeId,
    variable: String,
    last_value: Option<String>,
}

impl ValueController {
    pub fn new(element: NodeId) -> Self {
        Self {
            element,
            variable: String::new(),
            last_value: None,
        }
    }
}

impl DataController for ValueController {
    fn initialize(
        &mut self,
        model: &mut DataModel,
        dom: &mut Dom,
        element: NodeId,
        expression: &str,
        _modifier: &str,
    ) -> bool {
        let Some(variable) = variable_name(model, expression) else {
            return false;
        };
        self.element = element;
        self.last_value = dom
            .get(element)
            .and_then(|data| data.attributes.get(VALUE_ATTRIBUTE))
            .map(str::to_owned);
        self.variable = variable;
        true
    }

    fn submit(&mut self, dom: &Dom) -> Option<(String, String)> {
        let value = dom.get(self.element)?.attributes.get(VALUE_ATTRIBUTE)?;
        if self.last_value.as_deref() == Some(value) {
            return None;
        }
        self.last_value = Some(value.to_owned());
        Some((self.variable.clone(), value.to_owned()))
    }

    fn element(&self) -> NodeId {
        self.element
    }
}

// ---------------------------------------------------------------------------
// data-for (structural)
// ---------------------------------------------------------------------------

/// Repeats inner content once per item of a comma-separated variable.
///
/// The expression is either `items` or `item : items`. Generating the
/// repeated children is left to the host; this view tracks the item list.
#[derive(Debug)]
pub struct ForView {
    element: NodeId,
    iterator: String,
    container: String,
    inner_content: String,
    items: Vec<String>,
}

impl ForView {
    pub fn new(element: NodeId) -> Self {
        Self {
            element,
            iterator: String::new(),
            container: String::new(),
            inner_content: String::new(),
            items: Vec::new(),
        }
    }

    /// Name each item is bound to; `it` when not given.
    pub fn iterator(&self) -> &str {
        &self.iterator
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn inner_content(&self) -> &str {
        &self.inner_content
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl DataView for ForView {
    fn initialize(
        &mut self,
        model: &mut DataModel,
        dom: &mut Dom,
        element: NodeId,
        expression: &str,
        inner_content: &str,
    ) -> bool {
        let (iterator, container) = match expression.split_once(':') {
            Some((iterator, container)) => (iterator.trim(), container),
            None => ("it", expression),
        };
        if iterator.is_empty() {
            return false;
        }
        let Some(container) = variable_name(model, container) else {
            return false;
        };
        self.element = element;
        self.iterator = iterator.to_owned();
        self.container = container;
        self.inner_content = inner_content.to_owned();
        self.update(model.variables(), dom);
        true
    }

    fn update(&mut self, variables: &Variables, _dom: &mut Dom) -> bool {
        let items: Vec<String> = variables
            .get(&self.container)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect();
        if items == self.items {
            return false;
        }
        self.items = items;
        true
    }

    fn element(&self) -> NodeId {
        self.element
    }
}
