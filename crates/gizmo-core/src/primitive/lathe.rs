//! Lathed (surface of revolution) mesh generation
//!
//! Arrows, maces and rings are all produced by sweeping a 2D profile around
//! an axis. Each profile point is `(axial, radial)`: distance along `axis`
//! and distance from it.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::{GeometryMesh, MeshVertex, compute_normals};
use crate::constants::LATHE_START_ANGLE;

/// Sweep `profile` around `axis`
///
/// # Arguments
/// * `axis` - Axis of revolution
/// * `arm1`, `arm2` - Orthonormal pair spanning the plane perpendicular to `axis`
/// * `slices` - Number of angular steps
/// * `profile` - `(axial, radial)` points, swept in order
/// * `eps` - Offset added to every vertex component, used to separate
///   coincident rings so they do not z-fight
pub fn make_lathed(
    axis: Vec3,
    arm1: Vec3,
    arm2: Vec3,
    slices: u32,
    profile: &[Vec2],
    eps: f32,
) -> GeometryMesh {
    let slices = slices.max(3);
    let stride = profile.len() as u32;
    let mut mesh = GeometryMesh::default();

    for i in 0..=slices {
        let angle = (i % slices) as f32 * TAU / slices as f32 + LATHE_START_ANGLE;
        let arm = arm1 * angle.cos() + arm2 * angle.sin();

        for p in profile {
            mesh.vertices.push(MeshVertex {
                position: axis * p.x + arm * p.y + Vec3::splat(eps),
                normal: Vec3::ZERO,
            });
        }

        if i > 0 {
            for j in 1..stride {
                let i0 = (i - 1) * stride + (j - 1);
                let i1 = i * stride + (j - 1);
                let i2 = i * stride + j;
                let i3 = (i - 1) * stride + j;
                mesh.triangles.push([i0, i1, i2]);
                mesh.triangles.push([i0, i2, i3]);
            }
        }
    }

    compute_normals(&mut mesh);
    mesh
}
