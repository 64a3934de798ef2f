use glam::{Vec2, Vec3};

use crate::config::RELEASE_SENSITIVITY;

use super::drag::DragRotationMapper;

/// Converts the pointer's release velocity into a spin for the physics body.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseInertia {
    pub sensitivity: f32,
}

impl Default for ReleaseInertia {
    fn default() -> Self {
        Self::new(RELEASE_SENSITIVITY)
    }
}

impl ReleaseInertia {
    pub fn new(sensitivity: f32) -> Self {
        Self { sensitivity }
    }

    /// Same axis mapping as the drag: vertical flicks tilt, horizontal flicks turn.
    pub fn angular_velocity(&self, velocity: Vec2) -> Vec3 {
        Vec3::new(velocity.y * self.sensitivity, -velocity.x * self.sensitivity, 0.0)
    }

    /// Ends the gesture on `mapper` and returns the spin to hand off.
    pub fn release(&self, mapper: &mut DragRotationMapper, velocity: Vec2) -> Vec3 {
        mapper.finish();
        self.angular_velocity(velocity)
    }
}
