//! Drag anchors and per-mode drag resolution
//!
//! A [`DragState`] is captured once on the click edge and then read, never
//! rewritten, on every following frame until release. Each resolver returns
//! `None` when the ray has no usable intersection this frame; the caller
//! then keeps the previous value.

mod rotate;
mod scale;
mod translate;

pub use rotate::{rotation_arm, rotation_drag};
pub use scale::scale_drag;
pub use translate::{axis_translation_dragger, plane_translation_dragger, translation_drag};

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use gizmo_core::Transform;

use crate::frame::GizmoFrame;

/// Snapshot taken at the click edge
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragState {
    /// Translation: hit point relative to the object position.
    /// Rotation and scale: world-space hit point.
    pub click_offset: Vec3,
    /// Translation: world-space hit point.
    /// Rotation and scale: object position.
    pub original_position: Vec3,
    /// Object orientation at the click
    pub original_orientation: Quat,
    /// Object scale at the click
    pub original_scale: Vec3,
}

impl DragState {
    /// Anchor for a translation drag hit at local ray parameter `t`
    pub fn capture_translation(gizmo: &GizmoFrame, src: &Transform, t: f32) -> Self {
        let local_hit = gizmo.rescaled_local_ray().point_at(t);
        let click_offset = gizmo.pose.orientation * local_hit;
        Self {
            click_offset,
            original_position: src.position + click_offset,
            original_orientation: src.orientation,
            original_scale: src.scale,
        }
    }

    /// Anchor for a rotation or scale drag hit at local ray parameter `t`
    pub fn capture_world_hit(gizmo: &GizmoFrame, src: &Transform, t: f32) -> Self {
        let local_hit = gizmo.rescaled_local_ray().point_at(t);
        Self {
            click_offset: gizmo.pose.transform_point(local_hit),
            original_position: src.position,
            original_orientation: src.orientation,
            original_scale: src.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FrameState, gizmo_transform_and_local_ray};
    use gizmo_core::Ray;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_translation_capture_is_world_hit() {
        let src = Transform::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let frame = FrameState {
            ray: Ray::new(Vec3::new(11.0, 0.0, 0.0), Vec3::NEG_X),
            ..Default::default()
        };
        let gizmo = gizmo_transform_and_local_ray(false, &src, &frame);
        let drag = DragState::capture_translation(&gizmo, &src, 5.0);
        assert!((drag.click_offset - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
        assert!((drag.original_position - Vec3::new(6.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_translation_capture_local_toggle() {
        let src =
            Transform::from_rotation_translation(Quat::from_rotation_z(FRAC_PI_2), Vec3::ZERO);
        let frame = FrameState {
            ray: Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y),
            ..Default::default()
        };
        let gizmo = gizmo_transform_and_local_ray(true, &src, &frame);
        let drag = DragState::capture_translation(&gizmo, &src, 4.0);
        // Local ray runs along -X; the offset is rotated back into world space
        assert!((drag.click_offset - Vec3::new(0.0, 6.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_world_hit_capture_with_draw_scale() {
        let src = Transform::from_translation(Vec3::new(0.0, 0.0, -10.0));
        let frame = FrameState {
            screenspace_scale: 100.0,
            camera_yfov: 0.5,
            ..Default::default()
        };
        let gizmo = gizmo_transform_and_local_ray(false, &src, &frame);
        let drag = DragState::capture_world_hit(&gizmo, &src, 2.0);
        // Descaling divides origin and direction alike, so t is shared with the world ray
        assert!(gizmo.draw_scale != 1.0);
        assert!((drag.click_offset - frame.ray.point_at(2.0)).length() < 1e-4);
        assert_eq!(drag.original_position, src.position);
    }
}
