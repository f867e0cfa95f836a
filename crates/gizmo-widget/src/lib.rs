//! Immediate-mode transform gizmo
//!
//! Translate, rotate and scale handles driven by a per-frame pick ray.
//!
//! # Architecture
//!
//! The host builds a [`FrameState`] every frame and feeds it to a
//! [`GizmoContext`]. Each gizmo call picks handles, advances the
//! interaction state for its identity and returns the updated transform
//! component. Handle triangles accumulate in a [`DrawList`].
//!
//! - [`handle::HandleCatalog`] - Shared handle meshes and colors
//! - [`frame`] - Host input, pointer edges, handle-local ray
//! - [`pick`] - Closest-hit handle picking
//! - [`drag`] - Drag anchors and per-mode drag resolution
//! - [`interaction`] - Identity keys and persistent state
//! - [`drawlist`] - Upload-ready triangle output
//!
//! # Module Structure
//!
//! ```text
//! gizmo-widget/
//! ├── config.rs       # GizmoConfig (RON)
//! ├── constants.rs    # Default profiles, colors, limits
//! ├── handle.rs       # HandleId, HandleCatalog
//! ├── frame.rs        # FrameState, GizmoFrame
//! ├── pick.rs         # Ray picking
//! ├── drag/           # Translate, rotate, scale resolvers
//! ├── interaction.rs  # GizmoId, InteractionState
//! ├── drawlist.rs     # DrawList, GizmoVertex
//! └── context.rs      # GizmoContext
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod drag;
pub mod drawlist;
pub mod frame;
pub mod handle;
pub mod interaction;
pub mod pick;

pub use config::{ConfigError, GizmoConfig};
pub use context::{GizmoContext, GizmoResponse};
pub use drawlist::{DrawList, GizmoVertex, Triangle};
pub use frame::{FrameState, GizmoFrame, Hotkeys, gizmo_transform_and_local_ray};
pub use handle::{DragConstraint, GizmoMode, HandleCatalog, HandleId};
pub use interaction::{GizmoId, InteractionPhase, InteractionState};

pub use gizmo_core::{Ray, Transform};
