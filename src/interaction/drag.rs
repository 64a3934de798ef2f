use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_RENORMALIZE_INTERVAL, DRAG_SENSITIVITY};
use crate::utils::math::{cross, from_axis_angle, is_degenerate, multiply, normalize, renormalize};

/// World-space camera placement the drag axes are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub up: Vec3,
}

/// World-space position and current orientation of the dragged solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPose {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Screen-relative rotation axes for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAxes {
    pub right: Vec3,
    pub up: Vec3,
}

impl DragAxes {
    /// Returns `None` when the camera sits on the object or looks along its own up vector.
    pub fn from_poses(camera: &CameraPose, object: &ObjectPose) -> Option<Self> {
        let view = object.position - camera.position;
        if is_degenerate(view) {
            return None;
        }
        let right = normalize(cross(camera.up, view));
        if is_degenerate(right) {
            return None;
        }
        let up = normalize(cross(view, right));
        Some(Self { right, up })
    }
}

/// Per-gesture state: last cumulative translation seen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragState {
    pub previous_translation: Vec2,
    pub active: bool,
}

impl DragState {
    pub fn reset(&mut self) {
        self.previous_translation = Vec2::ZERO;
        self.active = false;
    }
}

/// Result of feeding one drag update through the mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep {
    /// Rotation applied this frame, in world space.
    pub increment: Quat,
    pub orientation: Quat,
    /// The frame was skipped because the camera geometry had no usable axes.
    pub degenerate: bool,
}

/// Maps cumulative 2D drag translation onto camera-relative rotation.
#[derive(Debug, Clone)]
pub struct DragRotationMapper {
    pub sensitivity: f32,
    /// Updates between renormalizations of the output orientation; zero disables it.
    pub renormalize_interval: u32,
    state: DragState,
    updates_since_renormalize: u32,
}

impl Default for DragRotationMapper {
    fn default() -> Self {
        Self::new(DRAG_SENSITIVITY, DEFAULT_RENORMALIZE_INTERVAL)
    }
}

impl DragRotationMapper {
    pub fn new(sensitivity: f32, renormalize_interval: u32) -> Self {
        Self {
            sensitivity,
            renormalize_interval,
            state: DragState::default(),
            updates_since_renormalize: 0,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.active
    }

    /// Consumes one drag update and returns the object's new orientation.
    ///
    /// `translation` is cumulative since the gesture started. Vertical motion
    /// tilts about the camera's right axis, horizontal motion turns about its
    /// up axis, and the increment is pre-multiplied so it acts in world space.
    pub fn update(&mut self, translation: Vec2, camera: &CameraPose, object: &ObjectPose) -> RotationStep {
        let delta = (translation - self.state.previous_translation) * self.sensitivity;
        self.state.previous_translation = translation;
        self.state.active = true;

        let Some(axes) = DragAxes::from_poses(camera, object) else {
            return RotationStep {
                increment: Quat::IDENTITY,
                orientation: object.orientation,
                degenerate: true,
            };
        };

        let about_right = from_axis_angle(axes.right, delta.y);
        let about_up = from_axis_angle(axes.up, -delta.x);
        let increment = multiply(about_right, about_up);
        let mut orientation = multiply(increment, object.orientation);

        self.updates_since_renormalize += 1;
        if self.renormalize_interval > 0 && self.updates_since_renormalize >= self.renormalize_interval {
            orientation = renormalize(orientation);
            self.updates_since_renormalize = 0;
        }

        RotationStep {
            increment,
            orientation,
            degenerate: false,
        }
    }

    /// Keeps the gesture but counts renormalization from zero again.
    pub fn restart_renormalization(&mut self) {
        self.updates_since_renormalize = 0;
    }

    /// Ends the gesture; the next update measures from zero again.
    pub fn finish(&mut self) -> DragState {
        let ended = self.state;
        self.state.reset();
        self.updates_since_renormalize = 0;
        ended
    }
}
