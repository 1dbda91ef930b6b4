//! Rendering-side handles for loaded bodies
//!
//! The loader hands every parsed record to a [`Wrapper`] once. The renderer
//! decides what a handle is; [`DrawableWrapper`] is the default and yields a
//! [`DrawableBody`] that owns its record and knows its screen placement.

use std::borrow::Borrow;

use crate::error::WrapError;
use crate::persistence::record::BodyRecord;

/// Smallest radius a body is drawn with, in pixels
const MIN_SCREEN_RADIUS: f32 = 1.0;

/// Rendering collaborator: wraps one record into a drawable handle
pub trait Wrapper {
    type Handle;

    fn wrap(&self, record: BodyRecord) -> Result<Self::Handle, WrapError>;
}

/// Wrapper that returns records unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainWrapper;

impl Wrapper for PlainWrapper {
    type Handle = BodyRecord;

    fn wrap(&self, record: BodyRecord) -> Result<BodyRecord, WrapError> {
        Ok(record)
    }
}

/// Default wrapper producing [`DrawableBody`] handles with a world-to-screen scale
#[derive(Debug, Clone, Copy)]
pub struct DrawableWrapper {
    pub scale: f32, // screen pixels per world unit
}

impl Default for DrawableWrapper {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Wrapper for DrawableWrapper {
    type Handle = DrawableBody;

    fn wrap(&self, record: BodyRecord) -> Result<DrawableBody, WrapError> {
        if !record.position.iter().all(|c| c.is_finite()) {
            return Err(WrapError(format!("non-finite position {:?}", record.position)));
        }
        Ok(DrawableBody {
            record,
            scale: self.scale,
        })
    }
}

/// A body record paired with its screen mapping
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableBody {
    record: BodyRecord,
    scale: f32,
}

impl DrawableBody {
    pub fn record(&self) -> &BodyRecord {
        &self.record
    }

    /// Mutable access for the physics engine
    pub fn record_mut(&mut self) -> &mut BodyRecord {
        &mut self.record
    }

    pub fn into_record(self) -> BodyRecord {
        self.record
    }

    /// Screen-space center
    pub fn screen_position(&self) -> (f32, f32) {
        (
            self.record.position.x as f32 * self.scale,
            self.record.position.y as f32 * self.scale,
        )
    }

    /// Radius is already in pixels, only clamped from below
    pub fn screen_radius(&self) -> f32 {
        (self.record.radius as f32).max(MIN_SCREEN_RADIUS)
    }
}

impl Borrow<BodyRecord> for DrawableBody {
    fn borrow(&self) -> &BodyRecord {
        &self.record
    }
}
