//! Gizmo core primitives
//!
//! Pure, stateless building blocks shared by every manipulation mode:
//!
//! - [`primitive`] - handle mesh builders (box, cylinder, lathed revolution)
//! - [`ray`] - rays, planes and ray/plane/triangle/mesh intersection
//! - [`transform`] - rigid transform with scale, ray detransformation
//! - [`math`] - snapping and dead-zone helpers
//! - [`hash`] - FNV-1a identity hashing

pub mod constants;
pub mod hash;
pub mod math;
pub mod primitive;
pub mod ray;
pub mod transform;

pub use hash::fnv1a;
pub use math::{flush_to_zero, snap, snap_angle};
pub use primitive::{
    GeometryMesh, HandleMeshKind, MeshVertex, compute_normals, generate_handle_mesh, make_box,
    make_cylinder, make_lathed,
};
pub use ray::{Plane, Ray, intersect_ray_mesh, intersect_ray_plane, intersect_ray_triangle};
pub use transform::Transform;
