//! Gizmo constants
//!
//! Default handle dimensions, profiles, colors and drag limits. Every value
//! here seeds a field of [`crate::config::GizmoConfig`].

/// Handle geometry defaults (unit-size, handle-local space)
pub mod geometry {
    /// Arrow profile for translation axes, `(axial, radial)`
    pub const ARROW_PROFILE: [[f32; 2]; 5] =
        [[0.25, 0.0], [0.25, 0.05], [1.0, 0.05], [1.0, 0.10], [1.2, 0.0]];
    /// Mace profile for scale axes, `(axial, radial)`
    pub const MACE_PROFILE: [[f32; 2]; 6] = [
        [0.25, 0.0],
        [0.25, 0.05],
        [1.0, 0.05],
        [1.0, 0.1],
        [1.25, 0.1],
        [1.25, 0.0],
    ];
    /// Ring cross-section for rotation handles, `(axial, radial)`
    ///
    /// Repeated points split the sweep into flat-shaded bands.
    pub const RING_PROFILE: [[f32; 2]; 8] = [
        [0.025, 1.0],
        [-0.025, 1.0],
        [-0.025, 1.0],
        [-0.025, 1.1],
        [-0.025, 1.1],
        [0.025, 1.1],
        [0.025, 1.1],
        [0.025, 1.0],
    ];
    /// Protractor arrow drawn during a world-space rotation, `(axial, radial)`
    pub const ROTATION_ARROW_PROFILE: [[f32; 2]; 5] =
        [[0.0, 0.0], [0.0, 0.05], [0.8, 0.05], [0.9, 0.10], [1.0, 0.0]];
    /// Per-axis offset separating the three rings
    pub const RING_EPS: f32 = 0.003;
    /// Plane handle extent closest to the origin
    pub const PLANE_INNER: f32 = 0.25;
    /// Plane handle extent furthest from the origin
    pub const PLANE_OUTER: f32 = 0.75;
    /// Plane handle half thickness
    pub const PLANE_HALF_THICKNESS: f32 = 0.01;
    /// Center (view-plane) handle half extent
    pub const CENTER_HALF_EXTENT: f32 = 0.05;
}

/// Handle colors, `base` = idle, `highlight` = active or hovered
pub mod colors {
    /// X axis idle color (red)
    pub const X_BASE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// X axis active color
    pub const X_HIGHLIGHT: [f32; 4] = [1.0, 0.5, 0.5, 1.0];
    /// Y axis idle color (green)
    pub const Y_BASE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Y axis active color
    pub const Y_HIGHLIGHT: [f32; 4] = [0.5, 1.0, 0.5, 1.0];
    /// Z axis idle color (blue)
    pub const Z_BASE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    /// Z axis active color
    pub const Z_HIGHLIGHT: [f32; 4] = [0.5, 0.5, 1.0, 1.0];
    /// YZ plane idle color (cyan)
    pub const YZ_BASE: [f32; 4] = [0.0, 1.0, 1.0, 0.6];
    /// YZ plane active color
    pub const YZ_HIGHLIGHT: [f32; 4] = [0.5, 1.0, 1.0, 0.5];
    /// ZX plane idle color (magenta)
    pub const ZX_BASE: [f32; 4] = [1.0, 0.0, 1.0, 0.6];
    /// ZX plane active color
    pub const ZX_HIGHLIGHT: [f32; 4] = [1.0, 0.5, 1.0, 0.5];
    /// XY plane idle color (yellow)
    pub const XY_BASE: [f32; 4] = [1.0, 1.0, 0.0, 0.6];
    /// XY plane active color
    pub const XY_HIGHLIGHT: [f32; 4] = [1.0, 1.0, 0.5, 0.5];
    /// Center handle idle color
    pub const XYZ_BASE: [f32; 4] = [1.0, 1.0, 1.0, 0.35];
    /// Center handle active color
    pub const XYZ_HIGHLIGHT: [f32; 4] = [0.9, 0.9, 0.9, 0.25];
    /// Rotation arrow color
    pub const ROTATION_ARROW: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Drag resolution limits
pub mod drag {
    /// Scale offsets smaller than this are flushed to zero
    pub const SCALE_DEAD_ZONE: f32 = 0.02;
    /// Lower scale clamp
    pub const MIN_SCALE: f32 = 0.01;
    /// Upper scale clamp
    pub const MAX_SCALE: f32 = 1000.0;
    /// Arms with a larger dot product are treated as coincident
    pub const COINCIDENT_ARM_DOT: f32 = 0.999;
    /// Rotation angles below this (radians) are ignored
    pub const MIN_ROTATION_ANGLE: f32 = 0.001;
}

/// Frame defaults
pub mod frame {
    /// Smallest viewport height used for screen-space scaling (pixels)
    pub const MIN_VIEWPORT_HEIGHT: f32 = 1.0;
}
