//! Default constants and runtime configuration for the drag viewer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Radians of rotation per unit of drag translation.
pub const DRAG_SENSITIVITY: f32 = 0.01;

/// Scale from release velocity (units/sec) to angular velocity (rad/sec).
pub const RELEASE_SENSITIVITY: f32 = 0.0005;

/// Mass assigned to every shape preset.
pub const DEFAULT_MASS: f32 = 1.0;

pub const DEFAULT_FRICTION: f32 = 0.5;

pub const DEFAULT_RESTITUTION: f32 = 0.5;

/// Camera placement used when the scene is built (looking down -Z at the origin).
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 10.0];

/// World-up vector of the default camera (Y-up).
pub const DEFAULT_CAMERA_UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Drag updates between orientation renormalizations. Zero disables it.
pub const DEFAULT_RENORMALIZE_INTERVAL: u32 = 64;

/// Per-update budget; slower drag updates are reported with `warn!`.
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 16.0;

/// Tunables for a [`Viewer`](crate::viewer::Viewer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub drag_sensitivity: f32,
    pub release_sensitivity: f32,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
    pub camera_position: Vec3,
    pub camera_up: Vec3,
    pub renormalize_interval: u32,
    pub frame_budget_ms: f32,
    /// Zero the body's spin when a new drag starts.
    pub grab_stops_spin: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DRAG_SENSITIVITY,
            release_sensitivity: RELEASE_SENSITIVITY,
            mass: DEFAULT_MASS,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            camera_position: Vec3::from_array(DEFAULT_CAMERA_POSITION),
            camera_up: Vec3::from_array(DEFAULT_CAMERA_UP),
            renormalize_interval: DEFAULT_RENORMALIZE_INTERVAL,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            grab_stops_spin: true,
        }
    }
}

impl ViewerConfig {
    pub fn with_camera(mut self, position: Vec3, up: Vec3) -> Self {
        self.camera_position = position;
        self.camera_up = up;
        self
    }

    pub fn with_renormalize_interval(mut self, interval: u32) -> Self {
        self.renormalize_interval = interval;
        self
    }

    pub fn with_grab_stops_spin(mut self, enabled: bool) -> Self {
        self.grab_stops_spin = enabled;
        self
    }
}
