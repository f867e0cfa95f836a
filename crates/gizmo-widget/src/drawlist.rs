//! Per-frame triangle output
//!
//! Handles are emitted as colored world-space triangles. The vertex layout
//! is `Pod` so hosts can upload [`DrawList::vertices`] and
//! [`DrawList::indices`] directly as a dynamic mesh.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use gizmo_core::GeometryMesh;

/// Upload-ready gizmo vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GizmoVertex {
    /// World-space position
    pub position: [f32; 3],
    /// World-space unit normal
    pub normal: [f32; 3],
    /// RGBA
    pub color: [f32; 4],
}

/// One colored world-space triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// RGBA
    pub color: [f32; 4],
    /// First corner
    pub p0: Vec3,
    /// Second corner
    pub p1: Vec3,
    /// Third corner
    pub p2: Vec3,
}

/// Triangles accumulated during one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    vertices: Vec<GizmoVertex>,
    indices: Vec<u32>,
}

impl DrawList {
    /// Create an empty drawlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `mesh` transformed by `model` in a single color
    pub fn push_mesh(&mut self, mesh: &GeometryMesh, model: &Mat4, color: [f32; 4]) {
        let base = self.vertices.len() as u32;

        self.vertices.extend(mesh.vertices.iter().map(|v| GizmoVertex {
            position: model.transform_point3(v.position).to_array(),
            normal: model.transform_vector3(v.normal).normalize_or_zero().to_array(),
            color,
        }));
        self.indices
            .extend(mesh.triangles.iter().flat_map(|tri| tri.map(|i| base + i)));
    }

    /// Accumulated vertices
    pub fn vertices(&self) -> &[GizmoVertex] {
        &self.vertices
    }

    /// Triangle indices into [`DrawList::vertices`]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// No triangles yet
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Triangles in emission order. Each takes its color from its first corner.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            let corner = |i: u32| self.vertices[i as usize];
            let first = corner(tri[0]);
            Triangle {
                color: first.color,
                p0: Vec3::from_array(first.position),
                p1: Vec3::from_array(corner(tri[1]).position),
                p2: Vec3::from_array(corner(tri[2]).position),
            }
        })
    }

    /// Feed every triangle to a sink callback
    pub fn for_each_triangle(&self, mut sink: impl FnMut(Triangle)) {
        for triangle in self.triangles() {
            sink(triangle);
        }
    }

    /// Raw vertex bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Drop every triangle, keeping capacity
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}
