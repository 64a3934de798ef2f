//! Drag Spin – orientation control for a single rigid solid.
//!
//! Turns pointer drags into camera-relative quaternion rotation, hands the
//! release velocity to a physics engine as spin, and configures the inertia
//! tensor of the selected box preset. Rendering and physics integration stay
//! behind the [`SceneBackend`] and [`PhysicsBackend`] traits.

pub mod backend;
pub mod config;
pub mod core;
pub mod error;
pub mod interaction;
pub mod utils;
pub mod viewer;

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

pub use glam::{Mat3, Quat, Vec2, Vec3};

pub use backend::{
    InMemoryPhysics, InMemoryScene, NodeKind, PhysicsBackend, SceneBackend, SceneNode,
};
pub use config::ViewerConfig;
pub use crate::core::{
    rigidbody::{AxisAngularVelocity, RigidBody},
    shape::{ShapeDimensions, ShapePreset},
    types::{MassProperties, Material, Transform},
};
pub use error::{Result, ViewerError};
pub use interaction::{
    CameraPose, DragAxes, DragEvent, DragRotationMapper, DragState, ObjectPose, ReleaseInertia,
    RotationStep,
};
pub use utils::allocator::{Arena, Handle};
pub use viewer::{ActiveShape, Viewer};

/// Thread-safe handle to a [`Viewer`].
///
/// Every call takes the lock for its whole duration, so a shape swap can
/// never interleave with a drag update writing to the old node.
#[derive(Clone)]
pub struct SharedViewer {
    inner: Arc<Mutex<Viewer>>,
}

impl SharedViewer {
    pub fn new(viewer: Viewer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(viewer)),
        }
    }

    pub fn handle_event(&self, event: DragEvent) -> Result<()> {
        self.inner.lock().handle_event(event)
    }

    pub fn select_shape(&self, preset: ShapePreset) -> ActiveShape {
        self.inner.lock().select_shape(preset)
    }

    pub fn orientation(&self) -> Result<Quat> {
        self.inner.lock().orientation()
    }

    /// Direct access for reads that need several fields at once.
    pub fn lock(&self) -> MutexGuard<'_, Viewer> {
        self.inner.lock()
    }
}

impl Default for SharedViewer {
    fn default() -> Self {
        Self::new(Viewer::default())
    }
}
