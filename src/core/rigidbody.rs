use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::utils::allocator::Handle;
use crate::utils::math::{is_degenerate, normalize};

use super::shape::ShapeDimensions;
use super::types::{MassProperties, Material};

/// Angular velocity as a unit axis plus a rate in radians/sec.
///
/// Engines that store spin as a 4-vector use `(axis, rate)` as `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngularVelocity {
    pub axis: Vec3,
    pub rate: f32,
}

impl AxisAngularVelocity {
    pub fn from_vector(angular: Vec3) -> Self {
        if is_degenerate(angular) {
            return Self {
                axis: Vec3::Y,
                rate: 0.0,
            };
        }
        Self {
            axis: normalize(angular),
            rate: angular.length(),
        }
    }

    pub fn to_vector(self) -> Vec3 {
        self.axis * self.rate
    }
}

/// Parameters of the dynamic body attached to the displayed solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    /// Scene node the body drives.
    pub node: Handle,
    pub mass_properties: MassProperties,
    pub material: Material,
    pub affected_by_gravity: bool,
    pub is_kinematic: bool,
    pub angular_velocity: Vec3,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            node: Handle::default(),
            mass_properties: MassProperties::default(),
            material: Material::default(),
            affected_by_gravity: false,
            is_kinematic: false,
            angular_velocity: Vec3::ZERO,
        }
    }
}

impl RigidBody {
    pub fn new(node: Handle) -> Self {
        Self {
            node,
            ..Self::default()
        }
    }

    /// Dynamic, gravity-free body for a solid box with the given extents.
    pub fn for_box(node: Handle, dimensions: ShapeDimensions, mass: f32, material: Material) -> Self {
        Self {
            node,
            mass_properties: MassProperties::solid_cuboid(dimensions, mass),
            material,
            ..Self::default()
        }
    }

    pub fn set_angular_velocity(&mut self, angular: Vec3) {
        self.angular_velocity = angular;
    }

    pub fn axis_angular_velocity(&self) -> AxisAngularVelocity {
        AxisAngularVelocity::from_vector(self.angular_velocity)
    }

    pub fn is_spinning(&self) -> bool {
        !is_degenerate(self.angular_velocity)
    }
}
