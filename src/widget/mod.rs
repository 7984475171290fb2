//! Scene-graph host: drawable layers, clip markers and the ordered scene
//! container they are attached to.

mod clip;
mod layer;
mod scene;

pub use clip::{ClipLink, ClipRegion};
pub use layer::{Color, Layer, LayerKind, LayerRef};
pub use scene::Scene;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique layer ID.
pub fn next_layer_id() -> u64 {
    NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed)
}
