//! Shared test helpers.

#![allow(dead_code)]

use std::rc::Rc;

use overflow_text::{Color, FixedAdvanceMeasurer, LayerRef, ManualTicks, OverflowLabel, Scene};

/// One tick per millisecond.
pub const FREQ: u64 = 1000;
/// Every character is 10 px wide and lines are 20 px tall.
pub const MEASURER: FixedAdvanceMeasurer = FixedAdvanceMeasurer { advance: 10, line_height: 20 };

pub const BOX_X: i32 = 10;
pub const BOX_Y: i32 = 5;
pub const BOX_HEIGHT: i32 = 30;

/// A label attached to its own scene, driven by a manual clock.
pub struct Fixture {
    pub label: OverflowLabel,
    pub scene: Scene,
    pub ticks: Rc<ManualTicks>,
}

impl Fixture {
    /// Advance the clock by `ms` and run one frame.
    pub fn frame(&mut self, ms: u64) {
        self.ticks.advance_ms(ms);
        self.label.update(false);
    }
}

/// Label with `text` in a box of `width` x 30 at (10, 5), attached and idle.
pub fn setup(text: &str, width: i32) -> Fixture {
    let ticks = Rc::new(ManualTicks::new(FREQ));
    let mut label = OverflowLabel::new(22, Color::WHITE, Rc::new(MEASURER), ticks.clone());
    label.set_bounds(BOX_X, BOX_Y, width, BOX_HEIGHT);
    label.set_text(text);

    let mut scene = Scene::new();
    label.attach(&mut scene);
    Fixture { label, scene, ticks }
}

pub fn visible(layer: &LayerRef) -> bool {
    layer.borrow().visible
}
