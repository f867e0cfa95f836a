//! Gizmo configuration structures
//!
//! This module provides configurable handle geometry, colors and drag
//! limits that can be serialized to and loaded from RON files.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{colors, drag, geometry};

/// Handle geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandleGeometryConfig {
    /// Translation arrow profile, `(axial, radial)` points
    pub arrow_profile: Vec<Vec2>,
    /// Scale mace profile, `(axial, radial)` points
    pub mace_profile: Vec<Vec2>,
    /// Rotation ring cross-section, `(axial, radial)` points
    pub ring_profile: Vec<Vec2>,
    /// Protractor arrow profile, `(axial, radial)` points
    pub rotation_arrow_profile: Vec<Vec2>,
    /// Lathe slices for arrows and maces
    pub axis_slices: u32,
    /// Lathe slices for rings and the protractor arrow
    pub ring_slices: u32,
    /// Ring vertex offset
    pub ring_eps: f32,
    /// Plane handle inner extent
    pub plane_inner: f32,
    /// Plane handle outer extent
    pub plane_outer: f32,
    /// Plane handle half thickness
    pub plane_half_thickness: f32,
    /// Center handle half extent
    pub center_half_extent: f32,
}

fn profile<const N: usize>(points: [[f32; 2]; N]) -> Vec<Vec2> {
    points.into_iter().map(Vec2::from_array).collect()
}

impl Default for HandleGeometryConfig {
    fn default() -> Self {
        Self {
            arrow_profile: profile(geometry::ARROW_PROFILE),
            mace_profile: profile(geometry::MACE_PROFILE),
            ring_profile: profile(geometry::RING_PROFILE),
            rotation_arrow_profile: profile(geometry::ROTATION_ARROW_PROFILE),
            axis_slices: gizmo_core::constants::AXIS_LATHE_SLICES,
            ring_slices: gizmo_core::constants::RING_LATHE_SLICES,
            ring_eps: geometry::RING_EPS,
            plane_inner: geometry::PLANE_INNER,
            plane_outer: geometry::PLANE_OUTER,
            plane_half_thickness: geometry::PLANE_HALF_THICKNESS,
            center_half_extent: geometry::CENTER_HALF_EXTENT,
        }
    }
}

/// Idle and active color for one handle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HandleColors {
    /// Color while idle (RGBA)
    pub base: [f32; 4],
    /// Color while active or hovered (RGBA)
    pub highlight: [f32; 4],
}

impl HandleColors {
    /// Create a color pair
    pub const fn new(base: [f32; 4], highlight: [f32; 4]) -> Self {
        Self { base, highlight }
    }

    /// Pick the color for the current highlight state
    pub fn resolve(&self, highlighted: bool) -> [f32; 4] {
        if highlighted {
            self.highlight
        } else {
            self.base
        }
    }
}

/// Colors for every handle group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandlePalette {
    /// X axis (translate, rotate and scale)
    pub x: HandleColors,
    /// Y axis (translate, rotate and scale)
    pub y: HandleColors,
    /// Z axis (translate, rotate and scale)
    pub z: HandleColors,
    /// YZ translation plane
    pub yz: HandleColors,
    /// ZX translation plane
    pub zx: HandleColors,
    /// XY translation plane
    pub xy: HandleColors,
    /// Center (view-plane) translation handle
    pub xyz: HandleColors,
    /// Protractor arrow shown while rotating in world space
    pub rotation_arrow: HandleColors,
}

impl Default for HandlePalette {
    fn default() -> Self {
        Self {
            x: HandleColors::new(colors::X_BASE, colors::X_HIGHLIGHT),
            y: HandleColors::new(colors::Y_BASE, colors::Y_HIGHLIGHT),
            z: HandleColors::new(colors::Z_BASE, colors::Z_HIGHLIGHT),
            yz: HandleColors::new(colors::YZ_BASE, colors::YZ_HIGHLIGHT),
            zx: HandleColors::new(colors::ZX_BASE, colors::ZX_HIGHLIGHT),
            xy: HandleColors::new(colors::XY_BASE, colors::XY_HIGHLIGHT),
            xyz: HandleColors::new(colors::XYZ_BASE, colors::XYZ_HIGHLIGHT),
            rotation_arrow: HandleColors::new(colors::ROTATION_ARROW, colors::ROTATION_ARROW),
        }
    }
}

/// Drag resolution limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DragConfig {
    /// Scale offsets below this magnitude are flushed to zero
    pub scale_dead_zone: f32,
    /// Lower scale clamp
    pub min_scale: f32,
    /// Upper scale clamp
    pub max_scale: f32,
    /// Rotation arms with a larger dot product count as coincident
    pub coincident_arm_dot: f32,
    /// Rotation angles below this (radians) leave the orientation unchanged
    pub min_rotation_angle: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            scale_dead_zone: drag::SCALE_DEAD_ZONE,
            min_scale: drag::MIN_SCALE,
            max_scale: drag::MAX_SCALE,
            coincident_arm_dot: drag::COINCIDENT_ARM_DOT,
            min_rotation_angle: drag::MIN_ROTATION_ANGLE,
        }
    }
}

/// Complete gizmo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GizmoConfig {
    /// Handle geometry settings
    #[serde(default)]
    pub geometry: HandleGeometryConfig,
    /// Handle colors
    #[serde(default)]
    pub colors: HandlePalette,
    /// Drag limits
    #[serde(default)]
    pub drag: DragConfig,
}

impl GizmoConfig {
    /// Check that the configuration can build a usable handle catalog
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.geometry;
        for (name, points) in [
            ("arrow_profile", &g.arrow_profile),
            ("mace_profile", &g.mace_profile),
            ("ring_profile", &g.ring_profile),
            ("rotation_arrow_profile", &g.rotation_arrow_profile),
        ] {
            if points.len() < 2 {
                return Err(ConfigError::Invalid(format!(
                    "{name} needs at least 2 points, got {}",
                    points.len()
                )));
            }
        }

        if g.axis_slices < 3 || g.ring_slices < 3 {
            return Err(ConfigError::Invalid(format!(
                "lathe slices must be at least 3 (axis: {}, ring: {})",
                g.axis_slices, g.ring_slices
            )));
        }

        if g.plane_inner >= g.plane_outer {
            return Err(ConfigError::Invalid(format!(
                "plane_inner ({}) must be below plane_outer ({})",
                g.plane_inner, g.plane_outer
            )));
        }

        let d = &self.drag;
        if !(d.min_scale > 0.0 && d.min_scale < d.max_scale) {
            return Err(ConfigError::Invalid(format!(
                "scale limits must satisfy 0 < min ({}) < max ({})",
                d.min_scale, d.max_scale
            )));
        }

        Ok(())
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved gizmo config to {}", path.display());
        Ok(())
    }

    /// Serialize configuration to a pretty RON string
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load and validate configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_ron_str(&content)?;
        tracing::info!("Loaded gizmo config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from a RON string
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: GizmoConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(String),
    /// Encoding to RON failed
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Decoding from RON failed
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// The configuration cannot build a usable gizmo
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
