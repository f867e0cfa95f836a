//! Rigid transform with per-axis scale

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::ray::Ray;

/// Object pose: orientation, position and scale.
///
/// `orientation` is expected to be unit length. Rotation dragging treats a
/// degenerate quaternion as a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub orientation: Quat,
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity pose at the origin with unit scale
    pub const IDENTITY: Self = Self {
        orientation: Quat::IDENTITY,
        position: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn new(orientation: Quat, position: Vec3, scale: Vec3) -> Self {
        Self {
            orientation,
            position,
            scale,
        }
    }

    /// Unscaled pose
    pub fn from_rotation_translation(orientation: Quat, position: Vec3) -> Self {
        Self::new(orientation, position, Vec3::ONE)
    }

    pub fn from_translation(position: Vec3) -> Self {
        Self::new(Quat::IDENTITY, position, Vec3::ONE)
    }

    /// Column-major model matrix (scale, then rotate, then translate)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position)
    }

    /// Local axis directions expressed in world space
    pub fn axes(&self) -> [Vec3; 3] {
        [
            self.orientation * Vec3::X,
            self.orientation * Vec3::Y,
            self.orientation * Vec3::Z,
        ]
    }

    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.orientation * (v * self.scale)
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.position + self.transform_vector(p)
    }

    pub fn detransform_vector(&self, v: Vec3) -> Vec3 {
        (self.orientation.inverse() * v) / self.scale
    }

    pub fn detransform_point(&self, p: Vec3) -> Vec3 {
        self.detransform_vector(p - self.position)
    }

    /// Express a world-space ray in this transform's local frame
    pub fn detransform_ray(&self, ray: &Ray) -> Ray {
        Ray::new(
            self.detransform_point(ray.origin),
            self.detransform_vector(ray.direction),
        )
    }

    /// Express a local-space ray in world space
    pub fn transform_ray(&self, ray: &Ray) -> Ray {
        Ray::new(
            self.transform_point(ray.origin),
            self.transform_vector(ray.direction),
        )
    }
}
