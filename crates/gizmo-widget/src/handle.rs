//! Handle identifiers and the shared handle catalog
//!
//! Every draggable affordance is a [`HandleId`]. The catalog maps each one to
//! its unit-size mesh and colors, built once from a [`GizmoConfig`].

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use gizmo_core::{GeometryMesh, HandleMeshKind, generate_handle_mesh};

use crate::config::{GizmoConfig, HandleColors, HandleGeometryConfig, HandlePalette};

/// Manipulation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GizmoMode {
    /// Move along axes, planes or the view plane
    #[default]
    Translate,
    /// Turn about one axis
    Rotate,
    /// Stretch along one axis or uniformly
    Scale,
}

/// One draggable handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleId {
    /// X arrow
    TranslateX,
    /// Y arrow
    TranslateY,
    /// Z arrow
    TranslateZ,
    /// Square in the YZ plane
    TranslateYz,
    /// Square in the ZX plane
    TranslateZx,
    /// Square in the XY plane
    TranslateXy,
    /// Center box, slides in the view plane
    TranslateXyz,
    /// Ring around X
    RotateX,
    /// Ring around Y
    RotateY,
    /// Ring around Z
    RotateZ,
    /// X mace
    ScaleX,
    /// Y mace
    ScaleY,
    /// Z mace
    ScaleZ,
}

/// How a handle constrains translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragConstraint {
    /// Motion is restricted to a line through the anchor
    Axis(Vec3),
    /// Motion is restricted to a plane through the anchor with this normal
    Plane(Vec3),
}

impl HandleId {
    /// Every handle, in registration order (pick tie-break order)
    pub const ALL: [HandleId; 13] = [
        HandleId::TranslateX,
        HandleId::TranslateY,
        HandleId::TranslateZ,
        HandleId::TranslateYz,
        HandleId::TranslateZx,
        HandleId::TranslateXy,
        HandleId::TranslateXyz,
        HandleId::RotateX,
        HandleId::RotateY,
        HandleId::RotateZ,
        HandleId::ScaleX,
        HandleId::ScaleY,
        HandleId::ScaleZ,
    ];

    /// Translation handles
    pub const TRANSLATION: [HandleId; 7] = [
        HandleId::TranslateX,
        HandleId::TranslateY,
        HandleId::TranslateZ,
        HandleId::TranslateYz,
        HandleId::TranslateZx,
        HandleId::TranslateXy,
        HandleId::TranslateXyz,
    ];

    /// Rotation rings
    pub const ROTATION: [HandleId; 3] = [HandleId::RotateX, HandleId::RotateY, HandleId::RotateZ];

    /// Scale maces
    pub const SCALING: [HandleId; 3] = [HandleId::ScaleX, HandleId::ScaleY, HandleId::ScaleZ];

    /// Handles drawn and picked in `mode`
    pub fn handles_for(mode: GizmoMode) -> &'static [HandleId] {
        match mode {
            GizmoMode::Translate => &Self::TRANSLATION,
            GizmoMode::Rotate => &Self::ROTATION,
            GizmoMode::Scale => &Self::SCALING,
        }
    }

    /// Position in [`HandleId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Mode this handle belongs to
    pub fn mode(self) -> GizmoMode {
        match self {
            HandleId::TranslateX
            | HandleId::TranslateY
            | HandleId::TranslateZ
            | HandleId::TranslateYz
            | HandleId::TranslateZx
            | HandleId::TranslateXy
            | HandleId::TranslateXyz => GizmoMode::Translate,
            HandleId::RotateX | HandleId::RotateY | HandleId::RotateZ => GizmoMode::Rotate,
            HandleId::ScaleX | HandleId::ScaleY | HandleId::ScaleZ => GizmoMode::Scale,
        }
    }

    /// Basis axis index this handle is tied to.
    ///
    /// For plane handles this is the plane normal; the center handle has none.
    pub fn axis_index(self) -> Option<usize> {
        match self {
            HandleId::TranslateX | HandleId::TranslateYz | HandleId::RotateX | HandleId::ScaleX => {
                Some(0)
            }
            HandleId::TranslateY | HandleId::TranslateZx | HandleId::RotateY | HandleId::ScaleY => {
                Some(1)
            }
            HandleId::TranslateZ | HandleId::TranslateXy | HandleId::RotateZ | HandleId::ScaleZ => {
                Some(2)
            }
            HandleId::TranslateXyz => None,
        }
    }

    /// Unit basis vector for [`HandleId::axis_index`], zero for the center handle
    pub fn unit_axis(self) -> Vec3 {
        match self.axis_index() {
            Some(0) => Vec3::X,
            Some(1) => Vec3::Y,
            Some(2) => Vec3::Z,
            _ => Vec3::ZERO,
        }
    }

    /// Drag constraint given the gizmo basis and the camera orientation
    ///
    /// Axis arrows slide along their axis, plane squares slide in the plane
    /// orthogonal to their normal axis and the center box slides in the view
    /// plane. Rings and maces report their axis.
    pub fn constraint(self, axes: &[Vec3; 3], camera_orientation: Quat) -> DragConstraint {
        match self {
            HandleId::TranslateYz | HandleId::TranslateZx | HandleId::TranslateXy => {
                DragConstraint::Plane(axes[self.axis_index().unwrap_or(0)])
            }
            HandleId::TranslateXyz => DragConstraint::Plane(-(camera_orientation * Vec3::Z)),
            _ => DragConstraint::Axis(axes[self.axis_index().unwrap_or(0)]),
        }
    }

    fn colors(self, palette: &HandlePalette) -> HandleColors {
        match self {
            HandleId::TranslateYz => palette.yz,
            HandleId::TranslateZx => palette.zx,
            HandleId::TranslateXy => palette.xy,
            HandleId::TranslateXyz => palette.xyz,
            _ => match self.axis_index() {
                Some(1) => palette.y,
                Some(2) => palette.z,
                _ => palette.x,
            },
        }
    }

    fn mesh_kind(self, geometry: &HandleGeometryConfig) -> HandleMeshKind {
        let axis = self.unit_axis();
        // (arm1, arm2) complete a right-handed frame with the axis
        let (arm1, arm2) = match self.axis_index() {
            Some(1) => (Vec3::Z, Vec3::X),
            Some(2) => (Vec3::X, Vec3::Y),
            _ => (Vec3::Y, Vec3::Z),
        };
        let (inner, outer, half) = (
            geometry.plane_inner,
            geometry.plane_outer,
            geometry.plane_half_thickness,
        );

        match self {
            HandleId::TranslateX | HandleId::TranslateY | HandleId::TranslateZ => {
                lathe(axis, arm1, arm2, geometry.axis_slices, &geometry.arrow_profile, 0.0)
            }
            HandleId::TranslateYz => HandleMeshKind::Box {
                min: Vec3::new(-half, inner, inner),
                max: Vec3::new(half, outer, outer),
            },
            HandleId::TranslateZx => HandleMeshKind::Box {
                min: Vec3::new(inner, -half, inner),
                max: Vec3::new(outer, half, outer),
            },
            HandleId::TranslateXy => HandleMeshKind::Box {
                min: Vec3::new(inner, inner, -half),
                max: Vec3::new(outer, outer, half),
            },
            HandleId::TranslateXyz => HandleMeshKind::Box {
                min: Vec3::splat(-geometry.center_half_extent),
                max: Vec3::splat(geometry.center_half_extent),
            },
            HandleId::RotateX => lathe(
                axis,
                arm1,
                arm2,
                geometry.ring_slices,
                &geometry.ring_profile,
                geometry.ring_eps,
            ),
            HandleId::RotateY => lathe(
                axis,
                arm1,
                arm2,
                geometry.ring_slices,
                &geometry.ring_profile,
                -geometry.ring_eps,
            ),
            HandleId::RotateZ => lathe(
                axis,
                arm1,
                arm2,
                geometry.ring_slices,
                &geometry.ring_profile,
                0.0,
            ),
            HandleId::ScaleX | HandleId::ScaleY | HandleId::ScaleZ => {
                lathe(axis, arm1, arm2, geometry.axis_slices, &geometry.mace_profile, 0.0)
            }
        }
    }
}

fn lathe(
    axis: Vec3,
    arm1: Vec3,
    arm2: Vec3,
    slices: u32,
    profile: &[Vec2],
    eps: f32,
) -> HandleMeshKind {
    HandleMeshKind::Lathe {
        axis,
        arm1,
        arm2,
        slices,
        profile: profile.to_vec(),
        eps,
    }
}

/// Mesh and colors for one handle
#[derive(Debug, Clone)]
pub struct HandleComponent {
    /// Unit-size mesh in handle-local space
    pub mesh: GeometryMesh,
    /// Idle color
    pub base_color: [f32; 4],
    /// Active or hovered color
    pub highlight_color: [f32; 4],
}

impl HandleComponent {
    /// Color for the current highlight state
    pub fn color(&self, highlighted: bool) -> [f32; 4] {
        if highlighted {
            self.highlight_color
        } else {
            self.base_color
        }
    }
}

/// Immutable registry of every handle component
///
/// Built once per context and shared read-only by every gizmo identity.
#[derive(Debug, Clone)]
pub struct HandleCatalog {
    components: Vec<HandleComponent>,
}

impl HandleCatalog {
    /// Build every handle mesh from `config`
    pub fn new(config: &GizmoConfig) -> Self {
        let components = HandleId::ALL
            .iter()
            .map(|handle| {
                let colors = handle.colors(&config.colors);
                HandleComponent {
                    mesh: generate_handle_mesh(&handle.mesh_kind(&config.geometry)),
                    base_color: colors.base,
                    highlight_color: colors.highlight,
                }
            })
            .collect();

        Self { components }
    }

    /// Component for `handle`
    pub fn get(&self, handle: HandleId) -> &HandleComponent {
        &self.components[handle.index()]
    }
}
