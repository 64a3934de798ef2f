//! Vector and quaternion helpers layered on top of `glam`.
//!
//! Quaternions follow glam's Hamilton product convention: `multiply(a, b)`
//! rotates by `b` first and then by `a`.

use glam::{Quat, Vec3};

/// Squared length below which a vector has no usable direction.
pub const DEGENERATE_LENGTH_SQUARED: f32 = 1e-12;

/// Right-handed cross product.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Returns `v` scaled to unit length.
///
/// Zero-length and non-finite inputs map to [`Vec3::ZERO`] rather than NaN,
/// so callers can test the result with [`is_degenerate`].
pub fn normalize(v: Vec3) -> Vec3 {
    if is_degenerate(v) {
        return Vec3::ZERO;
    }
    v.normalize_or_zero()
}

pub fn is_degenerate(v: Vec3) -> bool {
    !v.is_finite() || v.length_squared() < DEGENERATE_LENGTH_SQUARED
}

/// Rotation of `angle` radians about a unit `axis`: `(axis * sin(a/2), cos(a/2))`.
#[inline]
pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
    let (sin, cos) = (angle * 0.5).sin_cos();
    let v = axis * sin;
    Quat::from_xyzw(v.x, v.y, v.z, cos)
}

/// Hamilton product `q1 * q2`.
#[inline]
pub fn multiply(q1: Quat, q2: Quat) -> Quat {
    q1 * q2
}

/// Restores unit length, falling back to identity for unusable input.
pub fn renormalize(q: Quat) -> Quat {
    let length_squared = q.length_squared();
    if !q.is_finite() || length_squared < DEGENERATE_LENGTH_SQUARED {
        return Quat::IDENTITY;
    }
    q.normalize()
}

/// Converts angular velocity vector (radians/sec) into a quaternion delta.
pub fn angular_velocity_to_quat(angular: Vec3, dt: f32) -> Quat {
    let angle = angular.length() * dt;
    if angle.abs() < 1e-6 {
        return Quat::IDENTITY;
    }
    from_axis_angle(normalize(angular), angle)
}
