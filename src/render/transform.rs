//! Transform submission with identity and value deduplication.

use std::rc::{Rc, Weak};

use glam::Mat4;

use crate::dom::{Dom, NodeId};

use super::context::RenderContext;
use super::interface::RenderInterface;
use super::RenderError;

/// The last transform handed to the backend.
///
/// `identity` is only compared by address and never upgraded. Holding a weak
/// reference keeps the allocation reserved, so a dropped transform's address
/// cannot be reused by a new one while it is cached.
#[derive(Debug, Default)]
pub struct TransformCache {
    identity: Option<Weak<Mat4>>,
    value: Mat4,
}

impl TransformCache {
    fn is_same_identity(&self, transform: Option<&Rc<Mat4>>) -> bool {
        match (&self.identity, transform) {
            (None, None) => true,
            (Some(cached), Some(current)) => std::ptr::eq(cached.as_ptr(), Rc::as_ptr(current)),
            _ => false,
        }
    }

    /// Record `transform` as current. Returns whether the backend must be told.
    pub fn update(&mut self, transform: Option<&Rc<Mat4>>) -> bool {
        if self.is_same_identity(transform) {
            return false;
        }

        let submit = match (&self.identity, transform) {
            (Some(_), Some(current)) => self.value != **current,
            _ => true,
        };
        if submit {
            if let Some(current) = transform {
                self.value = **current;
            }
        }
        self.identity = transform.map(Rc::downgrade);
        submit
    }
}

/// Submit `node`'s transform to the backend if it differs from the last one.
///
/// A transform equal in value to the last submission is not resent even when
/// it is a different allocation. A stale `node` counts as having no transform.
pub fn apply_transform<R: RenderInterface>(
    context: &mut RenderContext<R>,
    dom: &Dom,
    node: NodeId,
) -> Result<(), RenderError> {
    let interface = context.interface.as_mut().ok_or(RenderError::NoRenderInterface)?;
    let transform = dom.get(node).and_then(|data| data.transform.as_ref());

    if context.transform_cache.update(transform) {
        interface.set_transform(transform.map(|matrix| &**matrix));
    }
    Ok(())
}
