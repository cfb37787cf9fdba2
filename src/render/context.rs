//! Per-context render state: active clip, transform cache, backend.

use crate::config::ContextConfig;
use crate::geometry::Region;

use super::transform::TransformCache;

// ---------------------------------------------------------------------------
// RenderContext
// ---------------------------------------------------------------------------

/// State shared by every element rendered into one context.
///
/// Holds the active clip region and the last submitted transform so that
/// unchanged state is never pushed to the backend twice. The backend is
/// optional; without one, state is still tracked but pushes report
/// [`RenderError::NoRenderInterface`](super::RenderError::NoRenderInterface).
#[derive(Debug)]
pub struct RenderContext<R> {
    config: ContextConfig,
    pub(crate) interface: Option<R>,
    pub(crate) active_clip: Option<Region>,
    pub(crate) transform_cache: TransformCache,
}

impl<R> RenderContext<R> {
    /// Create a context rendering into `interface`.
    pub fn new(config: ContextConfig, interface: R) -> Self {
        Self {
            config,
            interface: Some(interface),
            active_clip: None,
            transform_cache: TransformCache::default(),
        }
    }

    /// Create a context without a backend.
    pub fn headless(config: ContextConfig) -> Self {
        Self {
            config,
            interface: None,
            active_clip: None,
            transform_cache: TransformCache::default(),
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn interface(&self) -> Option<&R> {
        self.interface.as_ref()
    }

    pub fn interface_mut(&mut self) -> Option<&mut R> {
        self.interface.as_mut()
    }

    /// Install a backend, returning the previous one.
    ///
    /// A new backend knows nothing of earlier submissions, so the transform
    /// cache is reset. Call [`apply_active_clip_region`](super::apply_active_clip_region)
    /// to push the scissor state.
    pub fn set_interface(&mut self, interface: R) -> Option<R> {
        self.transform_cache = TransformCache::default();
        self.interface.replace(interface)
    }

    /// Remove and return the backend.
    pub fn take_interface(&mut self) -> Option<R> {
        self.interface.take()
    }

    /// The clip region currently in effect; `None` when clipping is off.
    pub fn active_clip_region(&self) -> Option<Region> {
        self.active_clip
    }

    /// Overwrite the active clip region without pushing it.
    pub fn set_active_clip_region(&mut self, region: Option<Region>) {
        self.active_clip = region;
    }

    /// Device pixels per density-independent pixel.
    pub fn density_independent_pixel_ratio(&self) -> f32 {
        self.config.dp_ratio
    }
}

/// The density-independent pixel ratio of `context`, or 1.0 without one.
pub fn density_independent_pixel_ratio<R>(context: Option<&RenderContext<R>>) -> f32 {
    context.map_or(1.0, RenderContext::density_independent_pixel_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRenderer;

    #[test]
    fn dp_ratio_defaults_to_one() {
        assert_eq!(density_independent_pixel_ratio::<RecordingRenderer>(None), 1.0);

        let context = RenderContext::new(ContextConfig::new().with_dp_ratio(1.5), RecordingRenderer::new());
        assert_eq!(density_independent_pixel_ratio(Some(&context)), 1.5);
    }

    #[test]
    fn headless_has_no_interface() {
        let mut context: RenderContext<RecordingRenderer> = RenderContext::headless(ContextConfig::new());
        assert!(context.interface().is_none());
        assert_eq!(context.name(), "main");

        assert!(context.set_interface(RecordingRenderer::new()).is_none());
        assert!(context.interface().is_some());
        assert!(context.take_interface().is_some());
        assert!(context.interface_mut().is_none());
    }

    #[test]
    fn starts_unclipped() {
        let context = RenderContext::new(ContextConfig::new(), RecordingRenderer::new());
        assert_eq!(context.active_clip_region(), None);
    }
}
