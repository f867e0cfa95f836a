//! Primitive mesh generation for gizmo handles
//!
//! Generates vertices, normals, and triangles for the handle shapes:
//! - Box (plane handles, center handle)
//! - Cylinder (with end caps)
//! - Lathed revolution (arrows, maces, rings)

mod box_mesh;
mod cylinder;
mod lathe;

pub use box_mesh::make_box;
pub use cylinder::make_cylinder;
pub use lathe::make_lathed;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::NORMAL_EPSILON;

/// Mesh vertex: position and normal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Indexed triangle mesh. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometryMesh {
    pub vertices: Vec<MeshVertex>,
    pub triangles: Vec<[u32; 3]>,
}

impl GeometryMesh {
    /// Create an empty mesh with reserved capacity
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Resolve a triangle's corner positions
    pub fn triangle_positions(&self, tri: &[u32; 3]) -> [Vec3; 3] {
        tri.map(|i| self.vertices[i as usize].position)
    }
}

/// Recompute smooth vertex normals by accumulating face normals
///
/// Degenerate (zero-area) triangles contribute nothing; vertices whose
/// accumulated normal stays shorter than [`NORMAL_EPSILON`] get a zero normal.
pub fn compute_normals(mesh: &mut GeometryMesh) {
    for v in &mut mesh.vertices {
        v.normal = Vec3::ZERO;
    }

    for tri in &mesh.triangles {
        let [v0, v1, v2] = mesh.triangle_positions(tri);
        let face_normal = (v1 - v0).cross(v2 - v0);
        for &i in tri {
            mesh.vertices[i as usize].normal += face_normal;
        }
    }

    for v in &mut mesh.vertices {
        v.normal = if v.normal.length() > NORMAL_EPSILON {
            v.normal.normalize()
        } else {
            Vec3::ZERO
        };
    }
}

/// Parameters for a handle mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HandleMeshKind {
    /// Axis-aligned box between two corners
    Box { min: Vec3, max: Vec3 },
    /// Capped cylinder from the origin along `axis`
    Cylinder {
        axis: Vec3,
        arm1: Vec3,
        arm2: Vec3,
        slices: u32,
    },
    /// Profile swept around `axis`
    Lathe {
        axis: Vec3,
        arm1: Vec3,
        arm2: Vec3,
        slices: u32,
        profile: Vec<Vec2>,
        eps: f32,
    },
}

/// Build the mesh described by `kind`
pub fn generate_handle_mesh(kind: &HandleMeshKind) -> GeometryMesh {
    match kind {
        HandleMeshKind::Box { min, max } => make_box(*min, *max),
        HandleMeshKind::Cylinder {
            axis,
            arm1,
            arm2,
            slices,
        } => make_cylinder(*axis, *arm1, *arm2, *slices),
        HandleMeshKind::Lathe {
            axis,
            arm1,
            arm2,
            slices,
            profile,
            eps,
        } => make_lathed(*axis, *arm1, *arm2, *slices, profile, *eps),
    }
}
