//! Overflow Text
//!
//! Single-line label for localized text that may not fit its box. Fitting
//! text is centered; overflowing text is clipped with a fade hint while idle
//! and scrolls as a marquee while selected.

pub mod config;
pub mod dump;
pub mod error;
pub mod marquee;
pub mod overflow_label;
pub mod render;
pub mod session;
pub mod text;
pub mod tick;
pub mod widget;

pub use config::MarqueeConfig;
pub use error::{Error, Result};
pub use marquee::{Marquee, MarqueePhase, PhaseKind};
pub use overflow_label::{LabelLayers, OverflowLabel};
pub use render::LayoutRect;
pub use text::{FixedAdvanceMeasurer, TextExtent, TextMeasurer};
pub use tick::{ManualTicks, SystemTicks, TickSource};
pub use widget::{Color, Layer, LayerKind, LayerRef, Scene};
