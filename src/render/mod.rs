//! Render-time state: clip regions, transforms, and the backend boundary.

pub mod clip;
pub mod context;
pub mod interface;
pub mod transform;

pub use clip::{apply_active_clip_region, get_clipping_region, set_clipping_region, ClipRegion};
pub use context::{density_independent_pixel_ratio, RenderContext};
pub use interface::RenderInterface;
pub use transform::{apply_transform, TransformCache};

/// Errors from pushing state to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no render interface installed")]
    NoRenderInterface,
}
