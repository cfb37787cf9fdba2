//! Discovering `data-*` attributes and turning them into bound views and
//! controllers.
//!
//! Discovery runs in two phases. First every attribute of the element is
//! scanned under a shared borrow and a list of initializers is built. Only
//! then are the views and controllers initialized with mutable access to the
//! tree. Initializers may therefore add or remove attributes without
//! disturbing the scan.

use crate::dom::{Dom, NodeData, NodeId};

use super::attribute::parse_binding_name;
use super::factory::BindingFactory;
use super::view::{DataController, DataView};

/// Which bindings a discovery pass constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiscoveryMode<'a> {
    /// Ordinary views and controllers; cancelled by any structural type.
    Normal,
    /// Structural views only, receiving the element's inner content.
    Structural { inner_content: &'a str },
}

/// A binding found on an element, waiting to be initialized.
#[derive(Debug)]
struct BindingInitializer {
    type_name: String,
    modifier_or_inner_content: String,
    expression: String,
    view: Option<Box<dyn DataView>>,
    controller: Option<Box<dyn DataController>>,
}

/// Scan `data`'s attributes. `None` means a structural type cancelled the pass.
fn collect_initializers(
    data: &NodeData,
    node: NodeId,
    factory: &impl BindingFactory,
    mode: DiscoveryMode<'_>,
) -> Option<Vec<BindingInitializer>> {
    let mut initializers = Vec::new();

    for (name, value) in data.attributes.iter() {
        let Some(binding) = parse_binding_name(name) else {
            continue;
        };

        let (view, controller, modifier_or_inner_content) = match mode {
            DiscoveryMode::Structural { inner_content } => (
                factory.instance_view(binding.type_name, node, true),
                None,
                inner_content.to_owned(),
            ),
            DiscoveryMode::Normal => {
                if factory.is_structural(binding.type_name) {
                    return None;
                }
                (
                    factory.instance_view(binding.type_name, node, false),
                    factory.instance_controller(binding.type_name, node),
                    binding.modifier.unwrap_or_default().to_owned(),
                )
            }
        };

        if view.is_none() && controller.is_none() {
            continue;
        }
        initializers.push(BindingInitializer {
            type_name: binding.type_name.to_owned(),
            modifier_or_inner_content,
            expression: value.to_owned(),
            view,
            controller,
        });
    }

    Some(initializers)
}

fn apply_bindings(dom: &mut Dom, node: NodeId, factory: &impl BindingFactory, mode: DiscoveryMode<'_>) -> bool {
    let Some(data) = dom.get(node) else {
        return false;
    };
    let Some(model) = data.data_model.as_ref().and_then(|handle| handle.upgrade()) else {
        return false;
    };
    let Some(initializers) = collect_initializers(data, node, factory, mode) else {
        log::trace!("structural binding on {} cancels other bindings", dom.address(node));
        return false;
    };
    if initializers.is_empty() {
        return false;
    }

    let Ok(mut model) = model.try_borrow_mut() else {
        log::warn!("data model busy; bindings on {} not applied", dom.address(node));
        return false;
    };

    let mut applied = false;
    for initializer in initializers {
        let BindingInitializer {
            type_name,
            modifier_or_inner_content,
            expression,
            view,
            controller,
        } = initializer;

        if let Some(mut view) = view {
            if view.initialize(&mut model, dom, node, &expression, &modifier_or_inner_content) {
                model.add_view(view);
                applied = true;
            } else {
                log::warn!("could not add data-{type_name} view to element: {}", dom.address(node));
            }
        }

        if let Some(mut controller) = controller {
            if controller.initialize(&mut model, dom, node, &expression, &modifier_or_inner_content) {
                model.add_controller(controller);
                applied = true;
            } else {
                log::warn!("could not add data-{type_name} controller to element: {}", dom.address(node));
            }
        }
    }
    applied
}

/// Bind the views and controllers declared by `node`'s `data-*` attributes.
///
/// Returns `true` if at least one was added to the element's data model.
/// Returns `false` without binding anything when the element has no live
/// model or carries a structural binding; structural bindings are applied by
/// [`apply_structural_data_views`] instead.
pub fn apply_data_views_controllers(dom: &mut Dom, node: NodeId, factory: &impl BindingFactory) -> bool {
    apply_bindings(dom, node, factory, DiscoveryMode::Normal)
}

/// Bind the structural views declared on `node`, handing them `inner_content`.
pub fn apply_structural_data_views(
    dom: &mut Dom,
    node: NodeId,
    factory: &impl BindingFactory,
    inner_content: &str,
) -> bool {
    apply_bindings(dom, node, factory, DiscoveryMode::Structural { inner_content })
}
