//! Host draw pass: flattens a scene into draw commands.
//!
//! Mirrors what a renderer does with the scene: visible layers are visited
//! in order, clip markers switch the active clip rectangle, and every drawn
//! primitive records the clip that was active when it was emitted.

use crate::render::LayoutRect;
use crate::widget::{Color, LayerKind, Scene};

/// One primitive emitted by the draw pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Rect {
        layer: u64,
        rect: LayoutRect,
        color: Color,
        clip: Option<LayoutRect>,
    },
    Text {
        layer: u64,
        x: i32,
        y: i32,
        text: String,
        font_size: u32,
        color: Color,
        clip: Option<LayoutRect>,
    },
}

impl DrawCommand {
    pub fn layer(&self) -> u64 {
        match self {
            Self::Rect { layer, .. } | Self::Text { layer, .. } => *layer,
        }
    }

    pub fn clip(&self) -> Option<LayoutRect> {
        match self {
            Self::Rect { clip, .. } | Self::Text { clip, .. } => *clip,
        }
    }
}

/// Walk `scene` in draw order and emit what would be drawn.
///
/// Empty text and empty or fully transparent rectangles emit nothing. The
/// clip is always cleared at the end, like a renderer resetting its clip
/// rectangle after a frame.
pub fn build_draw_list(scene: &Scene) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    let mut clip: Option<LayoutRect> = None;

    for layer in scene.iter() {
        let layer = layer.borrow();
        if !layer.visible {
            continue;
        }
        match &layer.kind {
            LayerKind::ClipBegin(link) => {
                if let Some(rect) = link.current() {
                    clip = Some(rect);
                }
            }
            LayerKind::ClipEnd => clip = None,
            LayerKind::Rect => {
                let rect = LayoutRect::new(layer.x, layer.y, layer.width, layer.height);
                if rect.is_empty() || layer.color.a == 0 {
                    continue;
                }
                commands.push(DrawCommand::Rect { layer: layer.id, rect, color: layer.color, clip });
            }
            LayerKind::Text => {
                if layer.text.is_empty() {
                    continue;
                }
                commands.push(DrawCommand::Text {
                    layer: layer.id,
                    x: layer.x,
                    y: layer.y,
                    text: layer.text.clone(),
                    font_size: layer.font_size,
                    color: layer.color,
                    clip,
                });
            }
        }
    }

    if clip.is_some() {
        tracing::warn!("clip region left open at end of scene");
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{ClipRegion, Layer};

    fn text_layer(name: &str, text: &str) -> Layer {
        let mut layer = Layer::text(name, 20, Color::WHITE);
        layer.text = text.to_string();
        layer
    }

    #[test]
    fn clip_applies_only_between_markers() {
        let region = ClipRegion::new();
        let clip = LayoutRect::new(10, 10, 50, 20);
        region.enable(clip);

        let mut scene = Scene::new();
        scene.add(text_layer("before", "a").into_ref());
        scene.add(Layer::new(LayerKind::ClipBegin(region.link()), None).into_ref());
        scene.add(text_layer("inside", "b").into_ref());
        scene.add(Layer::new(LayerKind::ClipEnd, None).into_ref());
        scene.add(text_layer("after", "c").into_ref());

        let clips: Vec<_> = build_draw_list(&scene).iter().map(DrawCommand::clip).collect();
        assert_eq!(clips, [None, Some(clip), None]);
    }

    #[test]
    fn disabled_region_draws_unclipped() {
        let region = ClipRegion::new();
        let mut scene = Scene::new();
        scene.add(Layer::new(LayerKind::ClipBegin(region.link()), None).into_ref());
        scene.add(text_layer("inside", "b").into_ref());
        scene.add(Layer::new(LayerKind::ClipEnd, None).into_ref());

        let commands = build_draw_list(&scene);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].clip(), None);
    }

    #[test]
    fn skips_hidden_empty_and_transparent_layers() {
        let mut scene = Scene::new();
        let mut hidden = text_layer("hidden", "x");
        hidden.visible = false;
        scene.add(hidden.into_ref());
        scene.add(text_layer("empty", "").into_ref());
        let mut clear = Layer::rect("clear", Color::TRANSPARENT);
        clear.set_size(10, 10);
        scene.add(clear.into_ref());
        let mut flat = Layer::rect("flat", Color::BLACK);
        flat.set_size(10, 0);
        scene.add(flat.into_ref());

        assert!(build_draw_list(&scene).is_empty());
    }
}
