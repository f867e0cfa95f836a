//! Per-frame gizmo context
//!
//! Owns the handle catalog, the identity → interaction state map and the
//! frame's drawlist. The host calls [`GizmoContext::begin_frame`] once, any
//! number of gizmo functions, then [`GizmoContext::end_frame`].

use std::collections::HashMap;

use glam::{Mat4, Quat, Vec3};

use gizmo_core::{Transform, make_lathed};

use crate::config::{ConfigError, GizmoConfig};
use crate::drag::{DragState, rotation_arm, rotation_drag, scale_drag, translation_drag};
use crate::drawlist::DrawList;
use crate::frame::{FrameState, GizmoFrame, PointerEdges, gizmo_transform_and_local_ray};
use crate::handle::{GizmoMode, HandleCatalog, HandleId};
use crate::interaction::{GizmoId, GizmoKey, InteractionState};
use crate::pick::pick;

/// Result of one gizmo call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoResponse<T> {
    /// Updated component, or the input value when nothing changed
    pub value: T,
    /// The pointer is over one of this gizmo's handles
    pub hover: bool,
    /// A handle of this gizmo is being dragged
    pub active: bool,
}

/// Immediate-mode gizmo context
pub struct GizmoContext {
    config: GizmoConfig,
    catalog: HandleCatalog,
    interactions: HashMap<GizmoKey, InteractionState>,
    frame: FrameState,
    edges: PointerEdges,
    mode: GizmoMode,
    local_toggle: bool,
    drawlist: DrawList,
}

impl Default for GizmoContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GizmoContext {
    /// Create a context with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(GizmoConfig::default())
    }

    /// Create a context from a custom configuration
    pub fn with_config(config: GizmoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GizmoConfig) -> Self {
        let catalog = HandleCatalog::new(&config);
        Self {
            config,
            catalog,
            interactions: HashMap::new(),
            frame: FrameState::default(),
            edges: PointerEdges::default(),
            mode: GizmoMode::default(),
            local_toggle: false,
            drawlist: DrawList::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Shared handle meshes and colors
    pub fn catalog(&self) -> &HandleCatalog {
        &self.catalog
    }

    /// Current frame input
    pub fn frame(&self) -> &FrameState {
        &self.frame
    }

    /// Mode used by [`GizmoContext::transform_gizmo`]
    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    /// Change the mode used by [`GizmoContext::transform_gizmo`]
    pub fn set_mode(&mut self, mode: GizmoMode) {
        if self.mode != mode {
            tracing::debug!("Gizmo mode changed to {:?}", mode);
            self.mode = mode;
        }
    }

    /// Local (object-frame) versus world axes for [`GizmoContext::transform_gizmo`]
    pub fn local_toggle(&self) -> bool {
        self.local_toggle
    }

    /// Choose local or world axes for [`GizmoContext::transform_gizmo`]
    pub fn set_local_toggle(&mut self, local: bool) {
        self.local_toggle = local;
    }

    /// Persistent state for `id` in `mode`, if that gizmo has been used
    pub fn interaction(
        &self,
        id: impl Into<GizmoId>,
        mode: GizmoMode,
    ) -> Option<&InteractionState> {
        self.interactions.get(&GizmoKey::new(id.into(), mode))
    }

    /// Start a frame: derive pointer edges, apply hotkeys, reset the drawlist
    pub fn begin_frame(&mut self, frame: FrameState) {
        self.edges = PointerEdges::new(self.frame.pointer_down, frame.pointer_down);

        let previous = self.frame.hotkeys;
        let keys = frame.hotkeys;
        if keys.ctrl {
            if keys.translate && !previous.translate {
                self.set_mode(GizmoMode::Translate);
            }
            if keys.rotate && !previous.rotate {
                self.set_mode(GizmoMode::Rotate);
            }
            if keys.scale && !previous.scale {
                self.set_mode(GizmoMode::Scale);
            }
            if keys.local && !previous.local {
                self.local_toggle = !self.local_toggle;
                tracing::debug!("Gizmo local toggle set to {}", self.local_toggle);
            }
        }

        self.frame = frame;
        self.drawlist.clear();
    }

    /// Triangles emitted so far this frame
    pub fn drawlist(&self) -> &DrawList {
        &self.drawlist
    }

    /// Finish the frame and hand its triangles to the host
    pub fn end_frame(&mut self) -> DrawList {
        std::mem::take(&mut self.drawlist)
    }

    /// Translation gizmo: returns the updated position
    pub fn translation_gizmo(
        &mut self,
        id: impl Into<GizmoId>,
        local_toggle: bool,
        src: &Transform,
    ) -> GizmoResponse<Vec3> {
        let key = GizmoKey::new(id.into(), GizmoMode::Translate);
        let (gizmo, state) = self.update_interaction(key, local_toggle, src);

        let mut position = src.position;
        if let Some(handle) = self.dragged(&state) {
            let constraint = handle.constraint(&gizmo.axes(), self.frame.camera_orientation);
            if let Some(moved) = translation_drag(
                &state.drag,
                constraint,
                position,
                &self.frame.ray,
                self.frame.snap_translation,
            ) {
                position = moved;
            }
        }

        let model = placed(&gizmo, gizmo.pose.orientation, position);
        self.draw_handles(&model, &state, &HandleId::TRANSLATION);

        respond(position, &state)
    }

    /// Rotation gizmo: returns the updated orientation
    ///
    /// `src.orientation` must be unit length.
    pub fn rotation_gizmo(
        &mut self,
        id: impl Into<GizmoId>,
        local_toggle: bool,
        src: &Transform,
    ) -> GizmoResponse<Quat> {
        let key = GizmoKey::new(id.into(), GizmoMode::Rotate);
        let (gizmo, state) = self.update_interaction(key, local_toggle, src);

        let mut orientation = src.orientation;
        let mut world_drag = None;
        if let Some(handle) = self.dragged(&state) {
            let basis = if local_toggle {
                state.drag.original_orientation
            } else {
                Quat::IDENTITY
            };
            let axis = basis * handle.unit_axis();
            if let Some(rotated) = rotation_drag(
                &state.drag,
                axis,
                &self.frame.ray,
                self.frame.snap_rotation,
                &self.config.drag,
            ) {
                orientation = rotated;
            }
            if !local_toggle {
                world_drag = Some((handle, axis));
            }
        }

        match world_drag {
            Some((handle, axis)) => {
                // World-space drag: only the grabbed ring, turned by the delta, plus the arrow
                let delta = orientation * state.drag.original_orientation.inverse();
                let model = placed(&gizmo, delta, src.position);
                self.draw_handles(&model, &state, &[handle]);
                self.draw_rotation_arrow(&gizmo, &state.drag, axis, delta);
            }
            None => {
                let drawn = gizmo_orientation(local_toggle, orientation);
                let model = placed(&gizmo, drawn, src.position);
                self.draw_handles(&model, &state, &HandleId::ROTATION);
            }
        }

        respond(orientation, &state)
    }

    /// Scaling gizmo: returns the updated scale
    ///
    /// With `uniform` set every component follows the dragged mace.
    pub fn scaling_gizmo(
        &mut self,
        id: impl Into<GizmoId>,
        local_toggle: bool,
        uniform: bool,
        src: &Transform,
    ) -> GizmoResponse<Vec3> {
        let key = GizmoKey::new(id.into(), GizmoMode::Scale);
        let (gizmo, state) = self.update_interaction(key, local_toggle, src);

        let mut scale = src.scale;
        if let Some(handle) = self.dragged(&state) {
            let axis = gizmo.pose.orientation * handle.unit_axis();
            if let Some(scaled) = scale_drag(
                &state.drag,
                axis,
                handle.unit_axis(),
                gizmo.pose.orientation,
                &self.frame.ray,
                uniform,
                self.frame.snap_scale,
                &self.config.drag,
            ) {
                scale = scaled;
            }
        }

        let model = gizmo.model_matrix();
        self.draw_handles(&model, &state, &HandleId::SCALING);

        respond(scale, &state)
    }

    /// Run the gizmo for the current mode and write the result back
    ///
    /// Uses the context's local toggle; ctrl requests uniform scaling.
    /// Returns whether the gizmo is hovered or active.
    pub fn transform_gizmo(&mut self, id: impl Into<GizmoId>, transform: &mut Transform) -> bool {
        let id = id.into();
        let local = self.local_toggle;
        match self.mode {
            GizmoMode::Translate => {
                let response = self.translation_gizmo(id, local, transform);
                transform.position = response.value;
                response.hover || response.active
            }
            GizmoMode::Rotate => {
                let response = self.rotation_gizmo(id, local, transform);
                transform.orientation = response.value;
                response.hover || response.active
            }
            GizmoMode::Scale => {
                let uniform = self.frame.hotkeys.ctrl;
                let response = self.scaling_gizmo(id, local, uniform, transform);
                transform.scale = response.value;
                response.hover || response.active
            }
        }
    }

    /// Pick, then apply click and release edges to the state for `key`
    fn update_interaction(
        &mut self,
        key: GizmoKey,
        local_toggle: bool,
        src: &Transform,
    ) -> (GizmoFrame, InteractionState) {
        let gizmo = gizmo_transform_and_local_ray(local_toggle, src, &self.frame);
        let hit = pick(&self.catalog, &gizmo.local_ray, HandleId::handles_for(key.mode));

        let state = self.interactions.entry(key).or_insert_with(|| {
            tracing::trace!("Creating interaction state for {:?}", key);
            InteractionState::default()
        });

        state.hover = hit.map(|hit| hit.handle);

        if self.edges.clicked {
            state.active = None;
            if let Some(hit) = hit {
                state.active = Some(hit.handle);
                state.drag = match key.mode {
                    GizmoMode::Translate => DragState::capture_translation(&gizmo, src, hit.t),
                    GizmoMode::Rotate | GizmoMode::Scale => {
                        DragState::capture_world_hit(&gizmo, src, hit.t)
                    }
                };
                tracing::debug!(
                    "Gizmo {:?} grabbed {:?} at {:?}",
                    key.id,
                    hit.handle,
                    state.drag.click_offset
                );
            }
        }

        // A missed release edge still ends the drag once the pointer is up
        if !self.frame.pointer_down {
            if let Some(handle) = state.active.take() {
                tracing::debug!("Gizmo {:?} released {:?}", key.id, handle);
            }
        }

        (gizmo, state.clone())
    }

    fn dragged(&self, state: &InteractionState) -> Option<HandleId> {
        if self.frame.pointer_down {
            state.active
        } else {
            None
        }
    }

    fn draw_handles(&mut self, model: &Mat4, state: &InteractionState, handles: &[HandleId]) {
        for &handle in handles {
            let component = self.catalog.get(handle);
            let color = component.color(state.is_highlighted(handle));
            self.drawlist.push_mesh(&component.mesh, model, color);
        }
    }

    /// Arrow from the rotation center toward the current drag angle
    fn draw_rotation_arrow(
        &mut self,
        gizmo: &GizmoFrame,
        drag: &DragState,
        axis: Vec3,
        delta: Quat,
    ) {
        let (center, arm) = rotation_arm(drag, axis);
        let Some(direction) = (delta * arm).try_normalize() else {
            return;
        };
        let (arm1, arm2) = direction.any_orthonormal_pair();
        let geometry = &self.config.geometry;
        let mesh = make_lathed(
            direction,
            arm1,
            arm2,
            geometry.ring_slices,
            &geometry.rotation_arrow_profile,
            0.0,
        );
        let model =
            Mat4::from_translation(center) * Mat4::from_scale(Vec3::splat(gizmo.draw_scale));
        let color = self.config.colors.rotation_arrow.resolve(true);
        self.drawlist.push_mesh(&mesh, &model, color);
    }
}

fn gizmo_orientation(local_toggle: bool, orientation: Quat) -> Quat {
    if local_toggle {
        orientation
    } else {
        Quat::IDENTITY
    }
}

/// Model matrix for drawing at an updated pose
fn placed(gizmo: &GizmoFrame, orientation: Quat, position: Vec3) -> Mat4 {
    GizmoFrame {
        pose: Transform::from_rotation_translation(orientation, position),
        ..*gizmo
    }
    .model_matrix()
}

fn respond<T>(value: T, state: &InteractionState) -> GizmoResponse<T> {
    GizmoResponse {
        value,
        hover: state.hover.is_some(),
        active: state.active.is_some(),
    }
}
