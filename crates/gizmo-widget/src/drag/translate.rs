//! Axis, plane and view-plane translation

use glam::Vec3;

use gizmo_core::{Plane, Ray, intersect_ray_plane, snap};

use super::DragState;
use crate::handle::DragConstraint;

/// Slide the grabbed point in the plane through the drag anchor.
///
/// The hit point is snapped (floor) when `snap_step > 0`.
pub fn plane_translation_dragger(
    drag: &DragState,
    plane_normal: Vec3,
    ray: &Ray,
    snap_step: f32,
) -> Option<Vec3> {
    let plane = Plane::from_point_normal(drag.original_position, plane_normal);
    let t = intersect_ray_plane(ray, &plane)?;
    Some(snap(ray.point_at(t), snap_step))
}

/// Slide the grabbed point along `axis` (unit length).
///
/// Intersects a plane that contains the axis and faces the ray origin, then
/// drops the off-axis part of the hit.
pub fn axis_translation_dragger(
    drag: &DragState,
    axis: Vec3,
    point: Vec3,
    ray: &Ray,
    snap_step: f32,
) -> Option<Vec3> {
    let plane_tangent = axis.cross(point - ray.origin);
    let plane_normal = axis.cross(plane_tangent);
    let hit = plane_translation_dragger(drag, plane_normal, ray, snap_step)?;
    let origin = drag.original_position;
    Some(origin + axis * (hit - origin).dot(axis))
}

/// New object position for a translation drag
pub fn translation_drag(
    drag: &DragState,
    constraint: DragConstraint,
    position: Vec3,
    ray: &Ray,
    snap_step: f32,
) -> Option<Vec3> {
    let point = position + drag.click_offset;
    let moved = match constraint {
        DragConstraint::Axis(axis) => axis_translation_dragger(drag, axis, point, ray, snap_step)?,
        DragConstraint::Plane(normal) => plane_translation_dragger(drag, normal, ray, snap_step)?,
    };
    Some(moved - drag.click_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(original_position: Vec3) -> DragState {
        DragState {
            original_position,
            ..Default::default()
        }
    }

    #[test]
    fn test_axis_dragger_moves_along_axis() {
        let drag = anchor(Vec3::new(5.0, 0.0, 0.0));
        let ray = Ray::new(Vec3::new(7.0, 10.0, 0.0), Vec3::NEG_Y);
        let point = axis_translation_dragger(&drag, Vec3::X, drag.original_position, &ray, 0.0)
            .expect("ray should hit the axis plane");
        assert!((point - Vec3::new(7.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_axis_dragger_discards_off_axis_motion() {
        let drag = anchor(Vec3::new(1.0, 2.0, 3.0));
        for direction in [
            Vec3::new(-0.3, -1.0, 0.2),
            Vec3::new(0.5, -0.4, -1.0),
            Vec3::new(-1.0, 0.7, 0.1),
        ] {
            let ray = Ray::new(Vec3::new(4.0, 9.0, 7.0), direction.normalize());
            if let Some(point) =
                axis_translation_dragger(&drag, Vec3::X, drag.original_position, &ray, 0.0)
            {
                assert!((point.y - 2.0).abs() < 1e-4);
                assert!((point.z - 3.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_axis_dragger_snaps() {
        let drag = anchor(Vec3::ZERO);
        let ray = Ray::new(Vec3::new(1.3, 10.0, 0.0), Vec3::NEG_Y);
        let point = axis_translation_dragger(&drag, Vec3::X, Vec3::ZERO, &ray, 0.5).unwrap();
        assert!((point.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_dragger_parallel_ray_fails() {
        let drag = anchor(Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(plane_translation_dragger(&drag, Vec3::Y, &ray, 0.0).is_none());
    }

    #[test]
    fn test_plane_dragger_behind_ray_fails() {
        let drag = anchor(Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(plane_translation_dragger(&drag, Vec3::Y, &ray, 0.0).is_none());
    }

    #[test]
    fn test_translation_drag_keeps_grab_offset() {
        // Grabbed 0.5 along X from the object at the origin
        let drag = DragState {
            click_offset: Vec3::new(0.5, 0.0, 0.0),
            original_position: Vec3::new(0.5, 0.0, 0.0),
            ..Default::default()
        };
        let ray = Ray::new(Vec3::new(2.5, 0.0, 10.0), Vec3::NEG_Z);
        let position =
            translation_drag(&drag, DragConstraint::Plane(Vec3::Z), Vec3::ZERO, &ray, 0.0).unwrap();
        assert!((position - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_translation_drag_plane_keeps_normal_component() {
        let drag = DragState {
            click_offset: Vec3::new(0.5, 0.5, 0.0),
            original_position: Vec3::new(0.5, 0.5, 0.0),
            ..Default::default()
        };
        let ray = Ray::new(Vec3::new(3.0, -1.0, 10.0), Vec3::new(0.0, 0.1, -1.0));
        let position =
            translation_drag(&drag, DragConstraint::Plane(Vec3::Z), Vec3::ZERO, &ray, 0.0).unwrap();
        assert!(position.z.abs() < 1e-5);
        assert!((position - Vec3::new(2.5, -0.5, 0.0)).length() < 1e-5);
    }
}
