//! Scene dump and diagnostic utilities.

use std::fmt::Write;

use crate::widget::{Layer, LayerKind, Scene};

/// Format every layer of `scene` in draw order, one per line.
///
/// Hidden layers are skipped when `visible_only` is set.
pub fn dump_scene(scene: &Scene, visible_only: bool) -> String {
    let mut out = String::new();
    for layer in scene.iter() {
        let layer = layer.borrow();
        if visible_only && !layer.visible {
            continue;
        }
        format_layer(&mut out, &layer);
    }
    out
}

/// Print the scene dump to stderr.
pub fn print_scene(scene: &Scene, visible_only: bool) {
    eprintln!("\n=== Scene ({} layers) ===\n", scene.len());
    eprint!("{}", dump_scene(scene, visible_only));
}

fn format_layer(out: &mut String, layer: &Layer) {
    let name = layer.name.as_deref().unwrap_or("(anon)");
    let shown = if layer.visible { "" } else { " [hidden]" };
    let _ = write!(out, "{} {}{}", layer.kind.as_str(), name, shown);
    match &layer.kind {
        LayerKind::Text => {
            let _ = write!(out, " @({},{}) {:?}", layer.x, layer.y, layer.text);
        }
        LayerKind::Rect => {
            let c = layer.color;
            let _ = write!(
                out,
                " @({},{}) {}x{} #{:02X}{:02X}{:02X}{:02X}",
                layer.x, layer.y, layer.width, layer.height, c.r, c.g, c.b, c.a
            );
        }
        LayerKind::ClipBegin(link) => match link.current() {
            Some(r) => {
                let _ = write!(out, " clip=({},{}) {}x{}", r.x, r.y, r.width, r.height);
            }
            None => out.push_str(" clip=off"),
        },
        LayerKind::ClipEnd => {}
    }
    out.push('\n');
}
