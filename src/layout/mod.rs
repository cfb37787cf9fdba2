//! Box model and the box positioner.

pub mod boxes;
pub mod builder;
pub mod position;

pub use boxes::{BoxArea, BoxEdge, ElementBox};
pub use builder::{build_box, BoxBuilder, StyleBoxBuilder};
pub use position::{position_element, resolve_anchor_offset, set_box, PositionAnchor, PositionError};
