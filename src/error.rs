//! Error types for the viewer.
//!
//! The math and drag mapping never fail; [`ViewerError`] only covers the
//! places where the viewer talks to its scene and physics backends.

use std::fmt;

use crate::utils::allocator::Handle;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// The scene backend no longer knows this node.
    NodeNotFound(Handle),
    /// The physics backend no longer knows this body.
    BodyNotFound(Handle),
    /// An operation needed the solid but none is spawned.
    NoActiveShape,
    /// Shape extents must be positive and finite.
    InvalidDimensions { width: f32, height: f32, length: f32 },
    /// A shape name did not match any preset.
    UnknownPreset(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NodeNotFound(id) => write!(f, "Scene node not found: {id}"),
            Self::BodyNotFound(id) => write!(f, "Rigid body not found: {id}"),
            Self::NoActiveShape => write!(f, "No shape is currently spawned"),
            Self::InvalidDimensions {
                width,
                height,
                length,
            } => write!(f, "Invalid shape dimensions: {width} x {height} x {length}"),
            Self::UnknownPreset(name) => write!(f, "Unknown shape preset: {name}"),
        }
    }
}

impl std::error::Error for ViewerError {}

/// Convenient Result type alias for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
