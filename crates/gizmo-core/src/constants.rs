//! Global constants for gizmo-core

/// Default number of slices for lathed axis handles (arrows, maces)
pub const AXIS_LATHE_SLICES: u32 = 16;

/// Default number of slices for lathed rotation rings
pub const RING_LATHE_SLICES: u32 = 32;

/// Angular offset of the first lathe slice (radians)
pub const LATHE_START_ANGLE: f32 = std::f32::consts::TAU / 8.0;

/// Normals shorter than this are left as zero instead of normalized
pub const NORMAL_EPSILON: f32 = 1e-4;
