//! Snapping and dead-zone helpers

use glam::Vec3;

/// Snap every component down to a multiple of `step`.
///
/// A non-positive `step` disables snapping.
pub fn snap(value: Vec3, step: f32) -> Vec3 {
    if step > 0.0 {
        (value / step).floor() * step
    } else {
        value
    }
}

/// Snap an angle to the nearest multiple of `step` (radians).
///
/// A non-positive `step` disables snapping.
pub fn snap_angle(angle: f32, step: f32) -> f32 {
    if step > 0.0 {
        (angle / step).round() * step
    } else {
        angle
    }
}

/// Force components whose magnitude is below `threshold` to exactly zero.
pub fn flush_to_zero(value: Vec3, threshold: f32) -> Vec3 {
    let flush = |c: f32| if c.abs() < threshold { 0.0 } else { c };
    Vec3::new(flush(value.x), flush(value.y), flush(value.z))
}
