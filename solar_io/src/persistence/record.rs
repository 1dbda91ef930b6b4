//! Record schema for a single celestial body.
//!
//! A `BodyRecord` is the persisted attribute set of one body:
//! - `kind`     – closed tag, `Star` or `Planet`
//! - `radius`   – visual radius in pixels
//! - `color`    – lower-case label token
//! - `mass`     – body mass
//! - `position` / `velocity` – 2D vectors using `NVec2`
//!
//! Field order on the wire is fixed by [`FIELDS`].

use std::fmt;

use nalgebra::Vector2;

use crate::error::RecordError;

pub type NVec2 = Vector2<f64>;

/// Wire field names in serialization order
pub const FIELDS: [&str; 8] = ["kind", "radius", "color", "mass", "x", "y", "vx", "vy"];

/// Number of whitespace-separated tokens in a record line
pub const TOKENS_PER_RECORD: usize = FIELDS.len();

/// Kind of celestial body, selected once at parse time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
}

impl BodyKind {
    /// Match a kind keyword case-insensitively (`"star"`, `"PLANET"`, ...)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "star" => Some(BodyKind::Star),
            "planet" => Some(BodyKind::Planet),
            _ => None,
        }
    }

    /// Capitalized tag written on the wire
    pub fn tag(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One body's persisted state.
///
/// `kind` is fixed at construction; the physics side may move, accelerate
/// and reweigh a body through the public fields but never retag it.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    kind: BodyKind,
    pub radius: f64, // visual radius in pixels
    pub color: String, // label token, no whitespace
    pub mass: f64, // mass
    pub position: NVec2, // (x, y)
    pub velocity: NVec2, // (vx, vy)
}

impl BodyRecord {
    /// `color` is lower-cased to match what the parser produces
    pub fn new(kind: BodyKind, radius: f64, color: impl Into<String>, mass: f64, position: NVec2, velocity: NVec2) -> Self {
        Self {
            kind,
            radius,
            color: color.into().to_lowercase(),
            mass,
            position,
            velocity,
        }
    }

    pub fn star(radius: f64, color: impl Into<String>, mass: f64, position: NVec2, velocity: NVec2) -> Self {
        Self::new(BodyKind::Star, radius, color, mass, position, velocity)
    }

    pub fn planet(radius: f64, color: impl Into<String>, mass: f64, position: NVec2, velocity: NVec2) -> Self {
        Self::new(BodyKind::Planet, radius, color, mass, position, velocity)
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Check that the record can be written as exactly one wire line.
    ///
    /// `color` is public and may have been changed after construction, so
    /// writers call this before touching the file.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.color.is_empty() || self.color.chars().any(char::is_whitespace) {
            return Err(RecordError::InvalidColor {
                color: self.color.clone(),
            });
        }
        if !self.radius.is_finite() {
            return Err(RecordError::NonFiniteRadius { radius: self.radius });
        }
        Ok(())
    }
}
