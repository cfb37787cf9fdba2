//! The render boundary.

use glam::Mat4;

use crate::geometry::Region;

/// Backend that receives scissor and transform state.
///
/// Implemented by the host renderer. Calls arrive only when state actually
/// changes; the backend does not need to deduplicate.
pub trait RenderInterface {
    /// Turn the scissor test on or off.
    fn enable_scissor_region(&mut self, enable: bool);

    /// Restrict drawing to `region`, in device pixels.
    fn set_scissor_region(&mut self, region: Region);

    /// Replace the active transform. `None` resets to identity.
    fn set_transform(&mut self, transform: Option<&Mat4>);
}

impl<R: RenderInterface + ?Sized> RenderInterface for Box<R> {
    fn enable_scissor_region(&mut self, enable: bool) {
        (**self).enable_scissor_region(enable);
    }

    fn set_scissor_region(&mut self, region: Region) {
        (**self).set_scissor_region(region);
    }

    fn set_transform(&mut self, transform: Option<&Mat4>) {
        (**self).set_transform(transform);
    }
}
