//! Ray casting utilities for handle picking and drag planes
//!
//! Intersection routines used by both picking (against handle meshes in
//! handle-local space) and dragging (against constraint planes in world
//! space).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::primitive::GeometryMesh;

/// A half-line starting at `origin` and extending along `direction`.
///
/// `direction` does not need to be normalized; ray parameters are expressed
/// in multiples of its length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ray {
    /// Start point of the ray.
    pub origin: Vec3,
    /// Direction of travel.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Multiply origin and direction by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            origin: self.origin * factor,
            direction: self.direction * factor,
        }
    }

    /// Divide origin and direction by `factor`.
    pub fn descaled(&self, factor: f32) -> Self {
        Self {
            origin: self.origin / factor,
            direction: self.direction / factor,
        }
    }
}

/// Plane in Hessian form: points `p` with `normal · p + d = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal (not necessarily unit length).
    pub normal: Vec3,
    /// Signed offset.
    pub d: f32,
}

impl Plane {
    /// Creates the plane through `point` with the given `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    /// Signed distance scaled by the normal length.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// Ray-plane intersection.
///
/// # Returns
///
/// * `Some(t)` - The ray parameter of the hit, `t >= 0`.
/// * `None` - If the ray is exactly parallel to the plane or the plane lies
///   behind the ray origin.
pub fn intersect_ray_plane(ray: &Ray, plane: &Plane) -> Option<f32> {
    let denom = plane.normal.dot(ray.direction);
    if denom == 0.0 {
        return None;
    }

    let t = -plane.distance_to_point(ray.origin) / denom;
    if t < 0.0 {
        return None;
    }

    Some(t)
}

/// Ray-triangle intersection (Möller–Trumbore).
///
/// Hits exactly on an edge count as inside. The ray is not culled against
/// back faces.
///
/// # Returns
///
/// * `Some(t)` - The ray parameter at the hit point, `t >= 0`.
/// * `None` - If the ray misses the triangle or is parallel to its plane.
pub fn intersect_ray_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let h = ray.direction.cross(e2);
    let a = e1.dot(h);
    if a == 0.0 {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(e1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * e2.dot(q);
    if t < 0.0 {
        return None;
    }

    Some(t)
}

/// Ray-mesh intersection.
///
/// Tests every triangle and keeps the closest hit. On equal `t` the
/// earlier triangle wins.
///
/// # Returns
///
/// * `Some((triangle_index, t))` - The closest triangle hit.
/// * `None` - If no triangle is hit.
pub fn intersect_ray_mesh(ray: &Ray, mesh: &GeometryMesh) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;

    for (index, tri) in mesh.triangles.iter().enumerate() {
        let [v0, v1, v2] = mesh.triangle_positions(tri);
        if let Some(t) = intersect_ray_triangle(ray, v0, v1, v2) {
            if best.is_none_or(|(_, best_t)| t < best_t) {
                best = Some((index, t));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::make_box;

    #[test]
    fn test_ray_plane_round_trip() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        let normal = Vec3::new(0.3, -0.5, 0.8).normalize();
        let plane = Plane::from_point_normal(point, normal);

        // A second point on the plane, reached by moving along a tangent
        let tangent = normal.any_orthonormal_vector();
        let target = point + tangent * 2.5;
        let origin = Vec3::new(-4.0, 7.0, 9.0);
        let ray = Ray::new(origin, (target - origin).normalize());

        let t = intersect_ray_plane(&ray, &plane).expect("ray should hit plane");
        assert!((ray.point_at(t) - target).length() < 1e-5);
    }

    #[test]
    fn test_ray_parallel_to_plane() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Z);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
        assert!(intersect_ray_plane(&ray, &plane).is_none());
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Z);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert!(intersect_ray_plane(&ray, &plane).is_none());
    }

    #[test]
    fn test_ray_hits_triangle() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, 5.0), Vec3::NEG_Z);
        let t = intersect_ray_triangle(&ray, Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(t, Some(5.0));
    }

    #[test]
    fn test_ray_misses_triangle() {
        let ray = Ray::new(Vec3::new(0.75, 0.75, 5.0), Vec3::NEG_Z);
        assert!(intersect_ray_triangle(&ray, Vec3::ZERO, Vec3::X, Vec3::Y).is_none());
    }

    #[test]
    fn test_triangle_behind_ray() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, 5.0), Vec3::Z);
        assert!(intersect_ray_triangle(&ray, Vec3::ZERO, Vec3::X, Vec3::Y).is_none());
    }

    #[test]
    fn test_ray_mesh_closest_hit() {
        let mesh = make_box(Vec3::splat(-1.0), Vec3::splat(1.0));
        let ray = Ray::new(Vec3::new(0.1, 0.2, 10.0), Vec3::NEG_Z);
        let (_, t) = intersect_ray_mesh(&ray, &mesh).expect("ray should hit box");
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_misses_mesh() {
        let mesh = make_box(Vec3::splat(-1.0), Vec3::splat(1.0));
        let ray = Ray::new(Vec3::new(3.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(intersect_ray_mesh(&ray, &mesh).is_none());
    }
}
