//! Data bindings: `data-*` attribute discovery, the data model, and the
//! built-in views and controllers.

pub mod attribute;
pub mod builtin;
pub mod discover;
pub mod factory;
pub mod model;
pub mod view;

pub use attribute::{parse_binding_name, BindingName};
pub use builtin::{AttributeView, ClassView, ForView, ValueController, ValueView};
pub use discover::{apply_data_views_controllers, apply_structural_data_views};
pub use factory::{BindingFactory, FactoryRegistry};
pub use model::{DataModel, DataModelHandle, Variables};
pub use view::{DataController, DataView};
