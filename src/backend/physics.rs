use glam::Vec3;

use crate::{
    core::rigidbody::RigidBody,
    utils::allocator::{Arena, Handle},
};

use super::PhysicsBackend;

/// Body store that records what the viewer hands over without stepping it.
#[derive(Debug, Default)]
pub struct InMemoryPhysics {
    bodies: Arena<RigidBody>,
}

impl InMemoryPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl PhysicsBackend for InMemoryPhysics {
    fn name(&self) -> &str {
        "InMemoryPhysics"
    }

    fn insert_body(&mut self, body: RigidBody) -> Handle {
        self.bodies.insert(body)
    }

    fn remove_body(&mut self, id: Handle) -> Option<RigidBody> {
        self.bodies.remove(id)
    }

    fn body(&self, id: Handle) -> Option<&RigidBody> {
        self.bodies.get(id)
    }

    fn set_angular_velocity(&mut self, id: Handle, angular: Vec3) -> bool {
        match self.bodies.get_mut(id) {
            Some(body) => {
                body.set_angular_velocity(angular);
                true
            }
            None => false,
        }
    }
}
