//! Clip region shared between a label and its clip markers.
//!
//! The label owns the region and rewrites it every frame. Markers in the
//! scene only hold a weak link and read it when they are drawn, so a marker
//! outliving its label is harmless.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::render::LayoutRect;

/// Owner side: the rectangle drawing is restricted to, when enabled.
#[derive(Debug, Clone, Default)]
pub struct ClipRegion {
    rect: Rc<Cell<Option<LayoutRect>>>,
}

impl ClipRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&self, rect: LayoutRect) {
        self.rect.set(Some(rect));
    }

    pub fn disable(&self) {
        self.rect.set(None);
    }

    pub fn get(&self) -> Option<LayoutRect> {
        self.rect.get()
    }

    pub fn link(&self) -> ClipLink {
        ClipLink { rect: Rc::downgrade(&self.rect) }
    }
}

/// Marker side: non-owning view of a `ClipRegion`.
#[derive(Debug, Clone)]
pub struct ClipLink {
    rect: Weak<Cell<Option<LayoutRect>>>,
}

impl ClipLink {
    /// Rectangle to clip to right now. `None` when the region is disabled,
    /// empty, or its owner is gone.
    pub fn current(&self) -> Option<LayoutRect> {
        let rect = self.rect.upgrade()?.get()?;
        (rect.width > 0 && rect.height > 0).then_some(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_follows_owner() {
        let region = ClipRegion::new();
        let link = region.link();
        assert_eq!(link.current(), None);

        let rect = LayoutRect::new(10, 20, 100, 30);
        region.enable(rect);
        assert_eq!(link.current(), Some(rect));

        region.disable();
        assert_eq!(link.current(), None);
    }

    #[test]
    fn empty_rect_is_not_a_clip() {
        let region = ClipRegion::new();
        region.enable(LayoutRect::new(0, 0, 0, 30));
        assert_eq!(region.link().current(), None);
    }

    #[test]
    fn dropped_owner_disables_link() {
        let region = ClipRegion::new();
        region.enable(LayoutRect::new(0, 0, 5, 5));
        let link = region.link();
        drop(region);
        assert_eq!(link.current(), None);
    }
}
