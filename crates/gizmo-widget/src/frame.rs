//! Per-frame host input and the gizmo frame derived from it

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use gizmo_core::{Ray, Transform};

use crate::constants::frame::MIN_VIEWPORT_HEIGHT;

/// Mode-switch keys, sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hotkeys {
    /// Switch to translation (with ctrl)
    pub translate: bool,
    /// Switch to rotation (with ctrl)
    pub rotate: bool,
    /// Switch to scaling (with ctrl)
    pub scale: bool,
    /// Flip local/world axes (with ctrl)
    pub local: bool,
    /// Modifier; also requests uniform scaling
    pub ctrl: bool,
}

/// Everything the host supplies for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    /// Primary button held
    pub pointer_down: bool,
    /// Viewport size in pixels
    pub viewport_size: Vec2,
    /// World-space pick ray
    pub ray: Ray,
    /// Vertical field of view (radians)
    pub camera_yfov: f32,
    /// Camera rotation, looking down its local -Z
    pub camera_orientation: Quat,
    /// Target handle size in pixels; 0 disables constant screen size
    pub screenspace_scale: f32,
    /// Translation snap step; 0 disables
    pub snap_translation: f32,
    /// Rotation snap step (radians); 0 disables
    pub snap_rotation: f32,
    /// Scale snap step; 0 disables
    pub snap_scale: f32,
    /// Mode-switch keys
    pub hotkeys: Hotkeys,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            pointer_down: false,
            viewport_size: Vec2::new(1280.0, 720.0),
            ray: Ray::new(Vec3::ZERO, Vec3::NEG_Z),
            camera_yfov: 1.0,
            camera_orientation: Quat::IDENTITY,
            screenspace_scale: 0.0,
            snap_translation: 0.0,
            snap_rotation: 0.0,
            snap_scale: 0.0,
            hotkeys: Hotkeys::default(),
        }
    }
}

/// Button transitions between the previous and current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerEdges {
    /// Button went down this frame
    pub clicked: bool,
    /// Button went up this frame
    pub released: bool,
}

impl PointerEdges {
    /// Compare the previous and current button state
    pub fn new(previous_down: bool, current_down: bool) -> Self {
        Self {
            clicked: !previous_down && current_down,
            released: previous_down && !current_down,
        }
    }
}

/// Gizmo placement for one call: draw scale, pose and the handle-local ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoFrame {
    /// World units per handle unit
    pub draw_scale: f32,
    /// Orientation (identity unless local), position; unit scale
    pub pose: Transform,
    /// Pick ray in unit-size handle space
    pub local_ray: Ray,
}

impl GizmoFrame {
    /// Gizmo basis in world space
    pub fn axes(&self) -> [Vec3; 3] {
        self.pose.axes()
    }

    /// Handle-local to world matrix
    pub fn model_matrix(&self) -> Mat4 {
        self.pose.matrix() * Mat4::from_scale(Vec3::splat(self.draw_scale))
    }

    /// Local ray scaled back to world units, still in the pose frame
    pub fn rescaled_local_ray(&self) -> Ray {
        self.local_ray.scaled(self.draw_scale)
    }
}

/// Scale that keeps handles a constant on-screen size.
///
/// Falls back to 1.0 when disabled or when the camera setup makes the
/// result non-positive or non-finite.
pub fn screenspace_draw_scale(position: Vec3, frame: &FrameState) -> f32 {
    if frame.screenspace_scale <= 0.0 {
        return 1.0;
    }

    let height = frame.viewport_size.y.max(MIN_VIEWPORT_HEIGHT);
    let distance = position.distance(frame.ray.origin);
    let scale = frame.camera_yfov.tan() * distance * frame.screenspace_scale / height;

    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        tracing::debug!("Degenerate screen-space scale {scale}, using 1.0");
        1.0
    }
}

/// Compute draw scale, gizmo pose and the handle-local pick ray
pub fn gizmo_transform_and_local_ray(
    local_toggle: bool,
    src: &Transform,
    frame: &FrameState,
) -> GizmoFrame {
    let draw_scale = screenspace_draw_scale(src.position, frame);
    let orientation = if local_toggle {
        src.orientation
    } else {
        Quat::IDENTITY
    };
    let pose = Transform::from_rotation_translation(orientation, src.position);
    let local_ray = pose.detransform_ray(&frame.ray).descaled(draw_scale);

    GizmoFrame {
        draw_scale,
        pose,
        local_ray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_pointer_edges() {
        assert_eq!(PointerEdges::new(false, true), PointerEdges { clicked: true, released: false });
        assert_eq!(PointerEdges::new(true, false), PointerEdges { clicked: false, released: true });
        assert_eq!(PointerEdges::new(true, true), PointerEdges::default());
        assert_eq!(PointerEdges::new(false, false), PointerEdges::default());
    }

    #[test]
    fn test_draw_scale_disabled() {
        let frame = FrameState::default();
        assert_eq!(screenspace_draw_scale(Vec3::new(0.0, 0.0, -50.0), &frame), 1.0);
    }

    #[test]
    fn test_draw_scale_grows_with_distance() {
        let frame = FrameState {
            screenspace_scale: 80.0,
            viewport_size: Vec2::new(800.0, 600.0),
            camera_yfov: 0.5,
            ..Default::default()
        };
        let near = screenspace_draw_scale(Vec3::new(0.0, 0.0, -5.0), &frame);
        let far = screenspace_draw_scale(Vec3::new(0.0, 0.0, -10.0), &frame);
        let expected = 0.5f32.tan() * 5.0 * 80.0 / 600.0;
        assert!((near - expected).abs() < 1e-6);
        assert!((far - 2.0 * near).abs() < 1e-5);
    }

    #[test]
    fn test_draw_scale_zero_height_is_clamped() {
        let frame = FrameState {
            screenspace_scale: 1.0,
            viewport_size: Vec2::new(100.0, 0.0),
            camera_yfov: 0.5,
            ..Default::default()
        };
        let scale = screenspace_draw_scale(Vec3::new(0.0, 0.0, -2.0), &frame);
        assert!((scale - 0.5f32.tan() * 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_draw_scale_at_camera_falls_back() {
        let frame = FrameState {
            screenspace_scale: 1.0,
            ..Default::default()
        };
        assert_eq!(screenspace_draw_scale(Vec3::ZERO, &frame), 1.0);
    }

    #[test]
    fn test_world_pose_ignores_orientation_and_scale() {
        let src = Transform::new(
            Quat::from_rotation_z(FRAC_PI_2),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::splat(4.0),
        );
        let gizmo = gizmo_transform_and_local_ray(false, &src, &FrameState::default());
        assert_eq!(gizmo.pose.orientation, Quat::IDENTITY);
        assert_eq!(gizmo.pose.position, src.position);
        assert_eq!(gizmo.pose.scale, Vec3::ONE);

        let local = gizmo_transform_and_local_ray(true, &src, &FrameState::default());
        assert_eq!(local.pose.orientation, src.orientation);
        assert_eq!(local.pose.scale, Vec3::ONE);
    }

    #[test]
    fn test_local_ray_is_descaled() {
        let src = Transform::from_translation(Vec3::new(0.0, 0.0, -10.0));
        let frame = FrameState {
            screenspace_scale: 100.0,
            viewport_size: Vec2::new(800.0, 800.0),
            camera_yfov: 0.5,
            ..Default::default()
        };
        let gizmo = gizmo_transform_and_local_ray(false, &src, &frame);
        let expected_origin = Vec3::new(0.0, 0.0, 10.0) / gizmo.draw_scale;
        assert!((gizmo.local_ray.origin - expected_origin).length() < 1e-4);
        assert!((gizmo.rescaled_local_ray().origin - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
    }
}
