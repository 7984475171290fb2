//! Ordered scene container that layers are attached to.

use super::LayerRef;
use std::collections::HashMap;
use std::rc::Rc;

/// Layers in draw order. Earlier layers are drawn first.
#[derive(Debug, Default)]
pub struct Scene {
    layers: Vec<LayerRef>,
    /// Position in `layers` by layer ID.
    index: HashMap<u64, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer on top of everything added so far.
    ///
    /// Adding a layer that is already in the scene is ignored so it can never
    /// be drawn twice.
    pub fn add(&mut self, layer: LayerRef) -> u64 {
        let id = layer.borrow().id;
        if let Some(&pos) = self.index.get(&id) {
            if !Rc::ptr_eq(&self.layers[pos], &layer) {
                tracing::warn!(id, "different layer with a duplicate id not added");
            } else {
                tracing::warn!(id, "layer already in scene");
            }
            return id;
        }
        self.index.insert(id, self.layers.len());
        self.layers.push(layer);
        id
    }

    /// Get a layer by ID.
    pub fn get(&self, id: u64) -> Option<&LayerRef> {
        self.index.get(&id).map(|&pos| &self.layers[pos])
    }

    pub fn contains(&self, id: u64) -> bool {
        self.index.contains_key(&id)
    }

    /// Layers in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &LayerRef> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
