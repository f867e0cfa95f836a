//! Axis and uniform scaling

use glam::{Quat, Vec3};

use gizmo_core::{Plane, Ray, flush_to_zero, intersect_ray_plane, snap};

use super::DragState;
use crate::config::DragConfig;

/// New object scale for a mace drag
///
/// * `axis` - Dragged axis in world space, used to orient the drag plane
/// * `mask` - Unit basis vector selecting the scale component that changes
/// * `pose_orientation` - Gizmo orientation, used to bring the offset back
///   into the object's local frame
#[allow(clippy::too_many_arguments)]
pub fn scale_drag(
    drag: &DragState,
    axis: Vec3,
    mask: Vec3,
    pose_orientation: Quat,
    ray: &Ray,
    uniform: bool,
    snap_step: f32,
    limits: &DragConfig,
) -> Option<Vec3> {
    let center = drag.original_position;
    let plane_tangent = axis.cross(center - ray.origin);
    let plane_normal = axis.cross(plane_tangent);
    let plane = Plane::from_point_normal(center, plane_normal);
    let t = intersect_ray_plane(ray, &plane)?;
    let hit = ray.point_at(t);

    let offset = (pose_orientation.inverse() * (hit - drag.click_offset)) * mask;
    let offset = flush_to_zero(offset, limits.scale_dead_zone);
    let scale = drag.original_scale + offset;

    let scale = if uniform {
        Vec3::splat(hit.dot(scale).clamp(limits.min_scale, limits.max_scale))
    } else {
        scale.clamp(Vec3::splat(limits.min_scale), Vec3::splat(limits.max_scale))
    };

    // Flooring can undershoot the lower clamp
    let min = Vec3::splat(limits.min_scale);
    let max = Vec3::splat(limits.max_scale);
    Some(snap(scale, snap_step).clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mace_anchor() -> DragState {
        DragState {
            click_offset: Vec3::new(1.1, 0.0, 0.0),
            original_position: Vec3::ZERO,
            original_orientation: Quat::IDENTITY,
            original_scale: Vec3::ONE,
        }
    }

    fn drag_to(x: f32, uniform: bool, snap_step: f32) -> Option<Vec3> {
        let ray = Ray::new(Vec3::new(x, 10.0, 0.0), Vec3::NEG_Y);
        scale_drag(
            &mace_anchor(),
            Vec3::X,
            Vec3::X,
            Quat::IDENTITY,
            &ray,
            uniform,
            snap_step,
            &DragConfig::default(),
        )
    }

    #[test]
    fn test_axis_scale() {
        let scale = drag_to(2.1, false, 0.0).unwrap();
        assert!((scale - Vec3::new(2.0, 1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_dead_zone() {
        let scale = drag_to(1.11, false, 0.0).unwrap();
        assert_eq!(scale, Vec3::ONE);
    }

    #[test]
    fn test_clamped_to_max() {
        let scale = drag_to(5000.0, false, 0.0).unwrap();
        assert_eq!(scale, Vec3::new(1000.0, 1.0, 1.0));
    }

    #[test]
    fn test_clamped_to_min() {
        let scale = drag_to(-5000.0, false, 0.0).unwrap();
        assert_eq!(scale, Vec3::new(0.01, 1.0, 1.0));
    }

    #[test]
    fn test_uniform_broadcasts() {
        let scale = drag_to(5000.0, true, 0.0).unwrap();
        assert_eq!(scale, Vec3::splat(1000.0));
    }

    #[test]
    fn test_snapped() {
        let scale = drag_to(2.4, false, 0.5).unwrap();
        assert!((scale.x - 2.0).abs() < 1e-5);
        assert_eq!(scale.y, 1.0);
    }

    #[test]
    fn test_snapped_stays_above_min() {
        let scale = drag_to(-50.0, false, 0.5).unwrap();
        assert_eq!(scale, Vec3::new(0.01, 1.0, 1.0));
    }

    #[test]
    fn test_local_offset_uses_pose_orientation() {
        // Gizmo rotated so its X axis points along world Y
        let orientation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let drag = DragState {
            click_offset: Vec3::new(0.0, 1.1, 0.0),
            ..mace_anchor()
        };
        let ray = Ray::new(Vec3::new(10.0, 2.1, 0.0), Vec3::NEG_X);
        let scale = scale_drag(
            &drag,
            Vec3::Y,
            Vec3::X,
            orientation,
            &ray,
            false,
            0.0,
            &DragConfig::default(),
        )
        .unwrap();
        assert!((scale - Vec3::new(2.0, 1.0, 1.0)).length() < 1e-5);
    }
}
