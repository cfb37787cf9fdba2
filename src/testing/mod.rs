//! Test doubles for the render boundary.
//!
//! [`RecordingRenderer`] implements [`RenderInterface`] by appending every
//! call to a list, so tests can assert exactly what reached the backend.

use glam::Mat4;

use crate::geometry::Region;
use crate::render::RenderInterface;

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    EnableScissor(bool),
    SetScissor(Region),
    SetTransform(Option<Mat4>),
}

/// A render backend that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Return and forget the recorded calls.
    pub fn take_calls(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of `set_transform` calls received.
    pub fn transform_submissions(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::SetTransform(_)))
            .count()
    }
}

impl RenderInterface for RecordingRenderer {
    fn enable_scissor_region(&mut self, enable: bool) {
        self.calls.push(RenderCall::EnableScissor(enable));
    }

    fn set_scissor_region(&mut self, region: Region) {
        self.calls.push(RenderCall::SetScissor(region));
    }

    fn set_transform(&mut self, transform: Option<&Mat4>) {
        self.calls.push(RenderCall::SetTransform(transform.copied()));
    }
}
