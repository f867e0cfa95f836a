//! Box (axis-aligned rectangular prism) mesh generation

use glam::Vec3;

use super::{GeometryMesh, MeshVertex};

/// Generate an axis-aligned box mesh spanning `min`..`max`
///
/// # Returns
/// 24 vertices (4 per face, for flat normals), 12 triangles
pub fn make_box(min: Vec3, max: Vec3) -> GeometryMesh {
    let (a, b) = (min, max);

    let mut mesh = GeometryMesh::with_capacity(24, 12);

    // Helper to add a face
    let mut add_face = |corners: [Vec3; 4], normal: Vec3| {
        let base = mesh.vertices.len() as u32;
        for position in corners {
            mesh.vertices.push(MeshVertex { position, normal });
        }
        // Two triangles per face
        mesh.triangles.push([base, base + 1, base + 2]);
        mesh.triangles.push([base, base + 2, base + 3]);
    };

    // -X face
    add_face(
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(a.x, b.y, a.z),
        ],
        Vec3::NEG_X,
    );

    // +X face
    add_face(
        [
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(b.x, b.y, b.z),
            Vec3::new(b.x, a.y, b.z),
        ],
        Vec3::X,
    );

    // -Y face
    add_face(
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, a.y, b.z),
        ],
        Vec3::NEG_Y,
    );

    // +Y face
    add_face(
        [
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
            Vec3::new(b.x, b.y, a.z),
        ],
        Vec3::Y,
    );

    // -Z face
    add_face(
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(b.x, a.y, a.z),
        ],
        Vec3::NEG_Z,
    );

    // +Z face
    add_face(
        [
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(b.x, b.y, b.z),
            Vec3::new(a.x, b.y, b.z),
        ],
        Vec3::Z,
    );

    mesh
}
