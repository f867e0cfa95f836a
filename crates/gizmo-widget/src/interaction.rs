//! Gizmo identities and their persistent interaction state

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gizmo_core::fnv1a;

use crate::drag::DragState;
use crate::handle::{GizmoMode, HandleId};

/// Stable identity for one gizmo
///
/// Names are hashed with 32-bit FNV-1a. Distinct names that collide share
/// interaction state; no collision detection is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GizmoId(pub u32);

impl From<&str> for GizmoId {
    fn from(name: &str) -> Self {
        Self(fnv1a(name.as_bytes()))
    }
}

impl From<&String> for GizmoId {
    fn from(name: &String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<String> for GizmoId {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<u32> for GizmoId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Uuid> for GizmoId {
    fn from(id: Uuid) -> Self {
        Self(fnv1a(id.as_bytes()))
    }
}

/// Lookup key: one interaction state per identity and mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GizmoKey {
    /// Host identity
    pub id: GizmoId,
    /// Mode the state belongs to
    pub mode: GizmoMode,
}

impl GizmoKey {
    /// Key for `id` in `mode`
    pub fn new(id: GizmoId, mode: GizmoMode) -> Self {
        Self { id, mode }
    }
}

/// Coarse interaction phase derived from [`InteractionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    /// Nothing under the pointer
    Idle,
    /// Pointer over a handle, no drag
    Hovering(HandleId),
    /// Handle grabbed
    Dragging(HandleId),
}

/// State that survives between frames for one gizmo key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Handle being dragged; only changes on click and release edges
    pub active: Option<HandleId>,
    /// Handle under the pointer this frame
    pub hover: Option<HandleId>,
    /// Anchor captured on the last click
    pub drag: DragState,
}

impl InteractionState {
    /// Current phase
    pub fn phase(&self) -> InteractionPhase {
        match (self.active, self.hover) {
            (Some(handle), _) => InteractionPhase::Dragging(handle),
            (None, Some(handle)) => InteractionPhase::Hovering(handle),
            (None, None) => InteractionPhase::Idle,
        }
    }

    /// Whether `handle` should be drawn highlighted
    ///
    /// The active handle wins; without one, the hovered handle lights up.
    pub fn is_highlighted(&self, handle: HandleId) -> bool {
        match self.active {
            Some(active) => active == handle,
            None => self.hover == Some(handle),
        }
    }
}
