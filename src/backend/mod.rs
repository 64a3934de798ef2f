//! Seams to the rendering and physics engines.
//!
//! The viewer never reaches into a global scene: it reads poses and writes
//! orientation and spin through these traits. [`InMemoryScene`] and
//! [`InMemoryPhysics`] are headless implementations; the physics store keeps
//! body parameters but leaves integration to a real engine.

pub mod physics;
pub mod scene;

pub use physics::InMemoryPhysics;
pub use scene::InMemoryScene;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::{
    core::{rigidbody::RigidBody, shape::ShapeDimensions, types::Transform},
    utils::{allocator::Handle, math::is_degenerate},
};

/// What a scene node draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Camera { fov_y_degrees: f32 },
    /// Box geometry centered on the node.
    Solid {
        dimensions: ShapeDimensions,
        chamfer_radius: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    /// Local transform relative to `parent`, or to the world for root nodes.
    pub transform: Transform,
    pub parent: Option<Handle>,
}

impl SceneNode {
    pub fn camera(name: impl Into<String>, position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Camera { fov_y_degrees: 60.0 },
            transform: Transform {
                rotation: look_at_rotation(position, target, up),
                ..Transform::from_position(position)
            },
            parent: None,
        }
    }

    pub fn solid(name: impl Into<String>, dimensions: ShapeDimensions) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Solid {
                dimensions,
                chamfer_radius: 0.0,
            },
            transform: Transform::default(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Handle) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Rotation of a camera at `eye` looking at `target`; identity when undefined.
pub fn look_at_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let forward = target - eye;
    if is_degenerate(forward) || is_degenerate(forward.cross(up)) {
        return Quat::IDENTITY;
    }
    // The view matrix holds the inverse of the camera's world rotation.
    Quat::from_mat4(&Mat4::look_at_rh(eye, target, up)).inverse().normalize()
}

/// Scene graph owned by the rendering engine.
pub trait SceneBackend: Send + Sync {
    fn name(&self) -> &str;

    fn spawn(&mut self, node: SceneNode) -> Handle;

    fn despawn(&mut self, id: Handle) -> Option<SceneNode>;

    fn node(&self, id: Handle) -> Option<&SceneNode>;

    /// Overwrites the node's local orientation. Returns `false` for stale handles.
    fn set_orientation(&mut self, id: Handle, orientation: Quat) -> bool;

    /// Transform of the node after applying its parents.
    fn world_transform(&self, id: Handle) -> Option<Transform>;

    fn world_position(&self, id: Handle) -> Option<Vec3> {
        self.world_transform(id).map(|transform| transform.position)
    }

    /// The node's local +Y expressed in world space.
    fn world_up(&self, id: Handle) -> Option<Vec3> {
        self.world_transform(id)
            .map(|transform| transform.rotation * Vec3::Y)
    }

    fn orientation(&self, id: Handle) -> Option<Quat> {
        self.node(id).map(|node| node.transform.rotation)
    }
}

/// Rigid-body store owned by the physics engine.
pub trait PhysicsBackend: Send + Sync {
    fn name(&self) -> &str;

    fn insert_body(&mut self, body: RigidBody) -> Handle;

    fn remove_body(&mut self, id: Handle) -> Option<RigidBody>;

    fn body(&self, id: Handle) -> Option<&RigidBody>;

    /// Hands the engine a new spin for the body. Returns `false` for stale handles.
    fn set_angular_velocity(&mut self, id: Handle, angular: Vec3) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_on_positive_z_keeps_identity_rotation() {
        let rotation = look_at_rotation(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        assert!((rotation * Vec3::Y - Vec3::Y).length() < 1e-5);
        assert!((rotation * Vec3::NEG_Z - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn camera_on_positive_x_faces_origin() {
        let rotation = look_at_rotation(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, Vec3::Y);
        // Cameras look down their local -Z.
        assert!((rotation * Vec3::NEG_Z - Vec3::NEG_X).length() < 1e-5);
        assert!((rotation * Vec3::Y - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn undefined_look_at_falls_back_to_identity() {
        assert_eq!(look_at_rotation(Vec3::ZERO, Vec3::ZERO, Vec3::Y), Quat::IDENTITY);
        assert_eq!(
            look_at_rotation(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y),
            Quat::IDENTITY
        );
    }
}
