//! Cylinder mesh generation (with end caps)

use std::f32::consts::TAU;

use glam::Vec3;

use super::{GeometryMesh, MeshVertex};

/// Generate a cylinder running from the origin to `axis`
///
/// # Arguments
/// * `axis` - Cylinder spine; its length is the cylinder height
/// * `arm1`, `arm2` - Orthogonal radius vectors spanning the cross-section
/// * `slices` - Number of segments around the circumference
pub fn make_cylinder(axis: Vec3, arm1: Vec3, arm2: Vec3, slices: u32) -> GeometryMesh {
    let slices = slices.max(3);
    let mut mesh = GeometryMesh::default();

    let rim = |i: u32| {
        let theta = (i as f32 / slices as f32) * TAU;
        arm1 * theta.cos() + arm2 * theta.sin()
    };

    // Side vertices
    for i in 0..=slices {
        let arm = rim(i);
        let normal = arm.normalize_or_zero();
        mesh.vertices.push(MeshVertex { position: arm, normal });
        mesh.vertices.push(MeshVertex {
            position: arm + axis,
            normal,
        });
    }

    // Side triangles
    for i in 0..slices {
        let base = i * 2;
        mesh.triangles.push([base, base + 2, base + 3]);
        mesh.triangles.push([base, base + 3, base + 1]);
    }

    let cap_normal = axis.normalize_or_zero();

    // Bottom cap center and rim
    let bottom_center = mesh.vertices.len() as u32;
    mesh.vertices.push(MeshVertex {
        position: Vec3::ZERO,
        normal: -cap_normal,
    });
    let bottom_rim = mesh.vertices.len() as u32;
    for i in 0..=slices {
        mesh.vertices.push(MeshVertex {
            position: rim(i),
            normal: -cap_normal,
        });
    }
    for i in 0..slices {
        mesh.triangles
            .push([bottom_center, bottom_rim + i + 1, bottom_rim + i]);
    }

    // Top cap center and rim
    let top_center = mesh.vertices.len() as u32;
    mesh.vertices.push(MeshVertex {
        position: axis,
        normal: cap_normal,
    });
    let top_rim = mesh.vertices.len() as u32;
    for i in 0..=slices {
        mesh.vertices.push(MeshVertex {
            position: rim(i) + axis,
            normal: cap_normal,
        });
    }
    for i in 0..slices {
        mesh.triangles.push([top_center, top_rim + i, top_rim + i + 1]);
    }

    mesh
}
