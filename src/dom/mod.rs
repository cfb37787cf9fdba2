//! Element arena: slotmap-backed tree with attributes, geometry and lookups.

pub mod attributes;
pub mod node;
pub mod query;
pub mod scroll;
pub mod tree;

pub use attributes::Attributes;
pub use node::{NodeData, NodeId};
pub use query::BreadthFirst;
pub use scroll::ScrollMetrics;
pub use tree::Dom;
