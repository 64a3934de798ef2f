//! Plain data describing the displayed solid: transforms, shape presets,
//! mass properties, and the rigid-body parameters handed to the physics engine.

pub mod rigidbody;
pub mod shape;
pub mod types;

pub use rigidbody::{AxisAngularVelocity, RigidBody};
pub use shape::{ShapeDimensions, ShapePreset};
pub use types::{MassProperties, Material, Transform};
