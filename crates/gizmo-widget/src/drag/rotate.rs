//! Ring rotation via the angle between two arms

use glam::{Quat, Vec3};

use gizmo_core::{Plane, Ray, intersect_ray_plane, snap_angle};

use super::DragState;
use crate::config::DragConfig;

/// Center of rotation and the unit arm from it to the grabbed point
pub fn rotation_arm(drag: &DragState, axis: Vec3) -> (Vec3, Vec3) {
    let origin = drag.original_position;
    let center = origin + axis * axis.dot(drag.click_offset - origin);
    (center, (drag.click_offset - center).normalize_or_zero())
}

/// New orientation for a ring drag about `axis` (unit, world space)
///
/// Returns the original orientation while the arms are nearly coincident.
/// `drag.original_orientation` must be unit length.
pub fn rotation_drag(
    drag: &DragState,
    axis: Vec3,
    ray: &Ray,
    snap_step: f32,
    limits: &DragConfig,
) -> Option<Quat> {
    debug_assert!(
        drag.original_orientation.is_normalized(),
        "rotation dragging needs a unit orientation"
    );
    let start = drag.original_orientation;

    let plane = Plane::from_point_normal(drag.click_offset, axis);
    let t = intersect_ray_plane(ray, &plane)?;

    let (center, arm1) = rotation_arm(drag, axis);
    let arm2 = (ray.point_at(t) - center).normalize_or_zero();

    let d = arm1.dot(arm2);
    if d > limits.coincident_arm_dot {
        return Some(start);
    }

    let angle = d.clamp(-1.0, 1.0).acos();
    if angle < limits.min_rotation_angle {
        return Some(start);
    }

    let Some(rotation_axis) = arm1.cross(arm2).try_normalize() else {
        return Some(start);
    };
    let delta = Quat::from_axis_angle(rotation_axis, snap_angle(angle, snap_step));
    Some((delta * start).normalize())
}
