use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FRICTION, DEFAULT_MASS, DEFAULT_RESTITUTION};

use super::shape::ShapeDimensions;

/// Position, orientation, and non-uniform scale of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Applies another transform on top of this one, returning the composition.
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * (self.scale * other.position),
            rotation: (self.rotation * other.rotation).normalize(),
            scale: self.scale * other.scale,
        }
    }
}

/// Mass and diagonal inertia tensor about the centroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    pub mass: f32,
    /// Principal moments `(Ix, Iy, Iz)` in the body's local frame.
    pub inertia: Vec3,
}

impl Default for MassProperties {
    fn default() -> Self {
        Self::solid_cuboid(ShapeDimensions::default(), DEFAULT_MASS)
    }
}

impl MassProperties {
    /// Solid rectangular prism with principal axes along the local frame.
    pub fn solid_cuboid(dimensions: ShapeDimensions, mass: f32) -> Self {
        let ShapeDimensions {
            width: w,
            height: h,
            length: l,
        } = dimensions;
        let factor = mass / 12.0;
        Self {
            mass,
            inertia: Vec3::new(
                factor * (h * h + l * l),
                factor * (w * w + l * l),
                factor * (w * w + h * h),
            ),
        }
    }

    pub fn inertia_matrix(&self) -> Mat3 {
        Mat3::from_diagonal(self.inertia)
    }
}

/// Surface coefficients handed to the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}
