//! Single-line label that handles text overflowing its box.
//!
//! Idle: text that fits is centered; text that overflows is clipped to its
//! longest fitting prefix, left-aligned, with three fade bands tinting the
//! trailing edge toward the background. Selected: overflowing text scrolls
//! as a marquee inside a clip region, with a background-colored overlay
//! fading in and out to hide the jump back to the start.
//!
//! Layers are created once in the constructor and attached to a scene in a
//! fixed order. Every later call only mutates them.

use std::rc::Rc;

use crate::config::MarqueeConfig;
use crate::marquee::{Marquee, MarqueeTiming, PhaseKind};
use crate::render::LayoutRect;
use crate::text::{TextExtent, TextMeasurer, fit_single_line, normalize};
use crate::tick::TickSource;
use crate::widget::{ClipRegion, Color, Layer, LayerKind, LayerRef, Scene};

/// Reference string for the single-line height.
const LINE_PROBE: &str = "Ag";

/// Layers owned by a label, in attach (draw) order.
#[derive(Debug)]
pub struct LabelLayers {
    /// Idle text: full text centered, or clipped prefix left-aligned.
    pub base: LayerRef,
    /// Fade hint bands, leading to trailing edge.
    pub fade_bands: [LayerRef; 3],
    pub clip_begin: LayerRef,
    /// Full text shifted left by the scroll offset.
    pub marquee: LayerRef,
    pub clip_end: LayerRef,
    /// Background-colored overlay used while fading.
    pub fade_overlay: LayerRef,
}

impl LabelLayers {
    fn new(font_size: u32, text_color: Color, background: Color, clip: &ClipRegion) -> Self {
        let hidden = |mut layer: Layer| {
            layer.visible = false;
            layer.into_ref()
        };
        Self {
            base: hidden(Layer::text("overflow.base", font_size, text_color)),
            fade_bands: [
                hidden(Layer::rect("overflow.fade0", background)),
                hidden(Layer::rect("overflow.fade1", background)),
                hidden(Layer::rect("overflow.fade2", background)),
            ],
            clip_begin: Layer::new(LayerKind::ClipBegin(clip.link()), Some("overflow.clip_begin")).into_ref(),
            marquee: hidden(Layer::text("overflow.marquee", font_size, text_color)),
            clip_end: Layer::new(LayerKind::ClipEnd, Some("overflow.clip_end")).into_ref(),
            fade_overlay: hidden(Layer::rect("overflow.fade_overlay", Color::TRANSPARENT)),
        }
    }

    /// All layers in draw order. Clip begin/end must bracket the marquee.
    pub fn in_draw_order(&self) -> [&LayerRef; 8] {
        [
            &self.base,
            &self.fade_bands[0],
            &self.fade_bands[1],
            &self.fade_bands[2],
            &self.clip_begin,
            &self.marquee,
            &self.clip_end,
            &self.fade_overlay,
        ]
    }

    fn set_fade_bands_visible(&self, visible: bool) {
        for band in &self.fade_bands {
            band.borrow_mut().visible = visible;
        }
    }
}

/// Overflow-aware single-line label.
pub struct OverflowLabel {
    layers: LabelLayers,
    clip: ClipRegion,
    measurer: Rc<dyn TextMeasurer>,
    ticks: Rc<dyn TickSource>,
    config: MarqueeConfig,
    marquee: Marquee,

    full_text: String,
    clipped_text: String,
    /// Extent of `full_text`, measured when the text changes.
    full_extent: TextExtent,
    /// Extent of `clipped_text`, measured on every refit.
    clipped_extent: TextExtent,
    text_color: Color,
    background: Color,
    font_size: u32,
    line_height: i32,
    bounds: LayoutRect,
    attached: bool,
    visible: bool,
    selected: bool,
    overflowing: bool,
}

impl std::fmt::Debug for OverflowLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverflowLabel")
            .field("text", &self.full_text)
            .field("clipped", &self.clipped_text)
            .field("bounds", &self.bounds)
            .field("visible", &self.visible)
            .field("selected", &self.selected)
            .field("overflowing", &self.overflowing)
            .field("marquee", &self.marquee)
            .finish()
    }
}

impl OverflowLabel {
    pub fn new(
        font_size: u32,
        text_color: Color,
        measurer: Rc<dyn TextMeasurer>,
        ticks: Rc<dyn TickSource>,
    ) -> Self {
        Self::with_config(font_size, text_color, measurer, ticks, MarqueeConfig::default())
    }

    pub fn with_config(
        font_size: u32,
        text_color: Color,
        measurer: Rc<dyn TextMeasurer>,
        ticks: Rc<dyn TickSource>,
        config: MarqueeConfig,
    ) -> Self {
        let background = Color::BLACK;
        let clip = ClipRegion::new();
        let line_height = measurer.measure(LINE_PROBE, font_size).height.max(1);
        Self {
            layers: LabelLayers::new(font_size, text_color, background, &clip),
            clip,
            measurer,
            ticks,
            marquee: Marquee::new(MarqueeTiming::from(&config)),
            config,
            full_text: String::new(),
            clipped_text: String::new(),
            full_extent: TextExtent::default(),
            clipped_extent: TextExtent::default(),
            text_color,
            background,
            font_size,
            line_height,
            bounds: LayoutRect::default(),
            attached: false,
            visible: true,
            selected: false,
            overflowing: false,
        }
    }

    /// Add the label's layers to `scene`. Only the first call has any effect.
    pub fn attach(&mut self, scene: &mut Scene) {
        if self.attached {
            return;
        }
        for layer in self.layers.in_draw_order() {
            scene.add(Rc::clone(layer));
        }
        self.attached = true;
        tracing::debug!(layers = scene.len(), "overflow label attached");
        self.update(true);
    }

    /// Pixel bounds of the text box. Non-positive sizes disable fitting.
    pub fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.bounds = LayoutRect::new(x, y, width, height);
        self.refit();
        self.update_static_label();
        self.hide_marquee(true);
    }

    /// Recolor the fade bands and the fade overlay.
    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
        self.update_fade_bands();
        let mut overlay = self.layers.fade_overlay.borrow_mut();
        overlay.color = color.with_alpha(self.marquee.alpha());
    }

    /// Replace the text. It is normalized to a single line and refitted.
    pub fn set_text(&mut self, text: &str) {
        self.full_text = normalize(text);
        self.full_extent = self.measurer.measure(&self.full_text, self.font_size);
        self.layers.marquee.borrow_mut().text.clone_from(&self.full_text);
        self.refit();
        self.update_static_label();
        self.hide_marquee(true);
    }

    pub fn set_selected(&mut self, selected: bool, force_reset: bool) {
        let changed = self.selected != selected;
        self.selected = selected;
        if changed || force_reset {
            self.update(true);
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.update(true);
    }

    /// Advance one frame. Call once per rendered frame while attached.
    pub fn update(&mut self, force_reset: bool) {
        if !self.visible {
            self.layers.base.borrow_mut().visible = false;
            self.layers.set_fade_bands_visible(false);
            self.hide_marquee(true);
            return;
        }

        if force_reset {
            self.hide_marquee(true);
        }

        let now = self.ticks.now();
        let freq = self.ticks.frequency();
        let max_offset = self.scroll_room();
        let runs = self.selected && self.overflowing && !self.bounds.is_empty() && freq > 0 && max_offset > 0;

        self.update_static_label_with(runs);
        if !runs {
            self.hide_marquee(false);
            return;
        }

        self.marquee.step(now, freq, max_offset);
        self.show_marquee_frame();
    }

    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }

    /// Normalized full text.
    pub fn text(&self) -> &str {
        &self.full_text
    }

    /// Text shown while idle.
    pub fn clipped_text(&self) -> &str {
        &self.clipped_text
    }

    pub fn bounds(&self) -> LayoutRect {
        self.bounds
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn phase(&self) -> PhaseKind {
        self.marquee.phase()
    }

    pub fn scroll_offset(&self) -> i32 {
        self.marquee.offset()
    }

    pub fn fade_alpha(&self) -> u8 {
        self.marquee.alpha()
    }

    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }

    /// Clip rectangle the marquee is drawn within, when scrolling.
    pub fn clip_rect(&self) -> Option<LayoutRect> {
        self.clip.get()
    }

    pub fn layers(&self) -> &LabelLayers {
        &self.layers
    }

    /// How far the full text can scroll: its width beyond the box.
    fn scroll_room(&self) -> i32 {
        self.full_extent.width.saturating_sub(self.bounds.width).max(0)
    }

    fn refit(&mut self) {
        let fit = fit_single_line(
            self.measurer.as_ref(),
            self.font_size,
            &self.full_text,
            self.bounds.width,
            self.bounds.height,
        );
        self.overflowing = fit.overflowing;
        self.clipped_text = fit.clipped.to_string();
        self.clipped_extent = self.measurer.measure(&self.clipped_text, self.font_size);
    }

    /// Whether the marquee would own the view if updated now.
    fn marquee_would_run(&self) -> bool {
        self.visible
            && self.selected
            && self.overflowing
            && !self.bounds.is_empty()
            && self.ticks.frequency() > 0
            && self.scroll_room() > 0
    }

    fn update_static_label(&self) {
        let runs = self.marquee_would_run();
        self.update_static_label_with(runs);
    }

    /// Position the idle label; it is hidden while the marquee runs.
    fn update_static_label_with(&self, marquee_runs: bool) {
        let extent = self.clipped_extent;
        let b = self.bounds;
        {
            let mut base = self.layers.base.borrow_mut();
            base.text.clone_from(&self.clipped_text);
            let x = if self.overflowing { b.x } else { centered(b.x, b.width, extent.width) };
            base.set_position(x, centered(b.y, b.height, self.text_height(extent)));
            base.visible = self.visible && !marquee_runs;
        }
        self.update_fade_bands();
    }

    fn update_fade_bands(&self) {
        let b = self.bounds;
        let band_width = self.config.band_width(b.width);
        let start_x = b.x.saturating_add(b.width).saturating_sub(band_width.saturating_mul(3));
        let show = self.visible && self.overflowing && !self.selected && band_width > 0;

        for (i, band) in self.layers.fade_bands.iter().enumerate() {
            let mut band = band.borrow_mut();
            band.color = self.background.with_alpha(self.config.fade_band_alphas[i]);
            band.set_position(start_x.saturating_add(band_width.saturating_mul(i as i32)), b.y);
            band.set_size(band_width, b.height);
            band.visible = show;
        }
    }

    /// Rendered height, or the line height for empty text.
    fn text_height(&self, extent: TextExtent) -> i32 {
        if extent.height > 0 { extent.height } else { self.line_height }
    }

    /// Hide marquee layers and disable clipping; `reset` also parks the
    /// animation at its initial pause.
    fn hide_marquee(&mut self, reset: bool) {
        self.clip.disable();
        self.layers.marquee.borrow_mut().visible = false;
        self.layers.fade_overlay.borrow_mut().visible = false;
        if reset {
            self.marquee.reset();
        }
    }

    fn show_marquee_frame(&mut self) {
        let b = self.bounds;
        self.layers.base.borrow_mut().visible = false;
        self.layers.set_fade_bands_visible(false);

        self.clip.enable(b);
        {
            let y = centered(b.y, b.height, self.text_height(self.full_extent));
            let mut marquee = self.layers.marquee.borrow_mut();
            marquee.set_position(b.x.saturating_sub(self.marquee.offset()), y);
            marquee.visible = true;
        }

        let alpha = self.marquee.alpha();
        let mut overlay = self.layers.fade_overlay.borrow_mut();
        if alpha > 0 {
            overlay.color = self.background.with_alpha(alpha);
            overlay.set_position(b.x, b.y);
            overlay.set_size(b.width, b.height);
            overlay.visible = true;
        } else {
            overlay.visible = false;
        }
    }
}

/// Start of a span of `size` centered in `len` pixels from `start`.
fn centered(start: i32, len: i32, size: i32) -> i32 {
    start.saturating_add(len.saturating_sub(size) / 2)
}
