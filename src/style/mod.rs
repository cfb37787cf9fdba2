//! Computed style values read by the geometry and clipping passes.
//!
//! Values are resolved by the host's cascade; this module only models the
//! subset the element utilities consume and parses inline declaration blocks
//! such as `"overflow: hidden; clip: 2"` into them.

pub mod scalar;
pub mod tokenizer;
pub mod values;
pub mod properties;

pub use properties::{parse_declarations, PropertyError};
pub use scalar::{Scalar, ScalarBox, Unit};
pub use values::{Clip, ComputedValues, Overflow};
