//! Ray picking against handle meshes

use gizmo_core::{Ray, intersect_ray_mesh};

use crate::handle::{HandleCatalog, HandleId};

/// Closest handle under the ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Handle that was hit
    pub handle: HandleId,
    /// Parameter along the handle-local ray
    pub t: f32,
}

/// Find the handle whose mesh the ray hits first.
///
/// `ray` must be in handle-local (descaled) space. Across all candidates the
/// smallest `t` wins; on equal `t` the earlier candidate is kept.
pub fn pick(catalog: &HandleCatalog, ray: &Ray, candidates: &[HandleId]) -> Option<PickHit> {
    let mut closest: Option<PickHit> = None;

    for &handle in candidates {
        if let Some((_, t)) = intersect_ray_mesh(ray, &catalog.get(handle).mesh) {
            if closest.is_none_or(|hit| t < hit.t) {
                closest = Some(PickHit { handle, t });
            }
        }
    }

    closest
}
