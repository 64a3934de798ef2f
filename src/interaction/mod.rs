//! Pointer interaction: drag-to-rotation mapping and release inertia.

pub mod drag;
pub mod release;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use drag::{CameraPose, DragAxes, DragRotationMapper, DragState, ObjectPose, RotationStep};
pub use release::ReleaseInertia;

/// Pointer events delivered by the UI, in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragEvent {
    /// Cumulative translation since the gesture started.
    Changed { translation: Vec2 },
    /// Release velocity in units per second.
    Ended { velocity: Vec2 },
}
