//! Marquee animation state machine.
//!
//! Loop: pause -> scroll -> end pause -> fade out (offset snaps back to 0
//! under a fully opaque overlay) -> fade in -> pause. All timing is in ticks
//! of the host's tick source; millisecond constants are converted on every
//! step so a frequency change never leaves stale durations behind.
//!
//! Scrolling uses integer speed accumulation: the remainder of
//! `elapsed * speed / freq` carries into the next step, so the offset after
//! any sequence of frames equals the offset of one frame covering the same
//! total time.

use crate::config::MarqueeConfig;
use crate::tick::ms_to_ticks;

/// Which phase the marquee is in, without its bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Pause,
    Scroll,
    EndPause,
    FadeOut,
    FadeIn,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Scroll => "scroll",
            Self::EndPause => "end-pause",
            Self::FadeOut => "fade-out",
            Self::FadeIn => "fade-in",
        }
    }
}

/// A marquee phase and the timestamps it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueePhase {
    /// Waiting at offset 0 until `until`.
    Pause { until: u64 },
    /// Scrolling; `carry` is the sub-pixel remainder (in pixel-ticks).
    Scroll { last_tick: u64, carry: u64 },
    /// Resting at the end of the text until `until`.
    EndPause { until: u64 },
    /// Overlay alpha ramping 0 -> 255.
    FadeOut { started: u64 },
    /// Overlay alpha ramping 255 -> 0.
    FadeIn { started: u64 },
}

impl MarqueePhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Pause { .. } => PhaseKind::Pause,
            Self::Scroll { .. } => PhaseKind::Scroll,
            Self::EndPause { .. } => PhaseKind::EndPause,
            Self::FadeOut { .. } => PhaseKind::FadeOut,
            Self::FadeIn { .. } => PhaseKind::FadeIn,
        }
    }
}

/// Marquee durations and speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarqueeTiming {
    pub start_delay_ms: u64,
    pub end_pause_ms: u64,
    pub fade_duration_ms: u64,
    /// Scroll speed; 0 is treated as 1 so a scroll always reaches its end.
    pub speed_px_per_sec: u64,
}

impl Default for MarqueeTiming {
    fn default() -> Self {
        Self::from(&MarqueeConfig::default())
    }
}

impl From<&MarqueeConfig> for MarqueeTiming {
    fn from(config: &MarqueeConfig) -> Self {
        Self {
            start_delay_ms: config.start_delay_ms,
            end_pause_ms: config.end_pause_ms,
            fade_duration_ms: config.fade_duration_ms,
            speed_px_per_sec: config.speed_px_per_sec.max(1),
        }
    }
}

/// Scroll offset and fade overlay state for one label.
#[derive(Debug, Clone)]
pub struct Marquee {
    timing: MarqueeTiming,
    /// `None` until the first step after a reset arms the initial pause.
    phase: Option<MarqueePhase>,
    offset: i32,
    max_offset: i32,
    alpha: u8,
}

impl Marquee {
    pub fn new(timing: MarqueeTiming) -> Self {
        Self { timing, phase: None, offset: 0, max_offset: 0, alpha: 0 }
    }

    pub fn timing(&self) -> MarqueeTiming {
        self.timing
    }

    /// Return to the parked pause at offset 0 with no overlay.
    pub fn reset(&mut self) {
        self.phase = None;
        self.offset = 0;
        self.max_offset = 0;
        self.alpha = 0;
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.map_or(PhaseKind::Pause, |p| p.kind())
    }

    /// Full phase state; `None` right after a reset.
    pub fn phase_state(&self) -> Option<MarqueePhase> {
        self.phase
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn max_offset(&self) -> i32 {
        self.max_offset
    }

    /// Opacity of the background overlay masking the offset reset.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Advance to tick `now`.
    ///
    /// `freq` must be non-zero and `max_offset` positive; callers park the
    /// marquee instead of stepping otherwise.
    pub fn step(&mut self, now: u64, freq: u64, max_offset: i32) {
        debug_assert!(freq > 0, "marquee stepped without a tick frequency");
        debug_assert!(max_offset > 0, "marquee stepped without scroll room");

        let start_delay = ms_to_ticks(freq, self.timing.start_delay_ms);
        let end_pause = ms_to_ticks(freq, self.timing.end_pause_ms);
        let fade = ms_to_ticks(freq, self.timing.fade_duration_ms);

        self.max_offset = max_offset.max(0);
        let current = match self.phase {
            Some(phase) => phase,
            None => {
                self.offset = 0;
                self.alpha = 0;
                MarqueePhase::Pause { until: now.saturating_add(start_delay) }
            }
        };

        let next = match current {
            MarqueePhase::Pause { until } => {
                self.alpha = 0;
                if now >= until {
                    MarqueePhase::Scroll { last_tick: now, carry: 0 }
                } else {
                    current
                }
            }
            MarqueePhase::Scroll { last_tick, carry } => {
                self.scroll(now, freq, last_tick, carry, end_pause)
            }
            MarqueePhase::EndPause { until } => {
                self.alpha = 0;
                if now >= until {
                    MarqueePhase::FadeOut { started: now }
                } else {
                    current
                }
            }
            MarqueePhase::FadeOut { started } => match fade_progress(now, started, fade) {
                Some(alpha) => {
                    self.alpha = alpha;
                    current
                }
                None => {
                    self.alpha = u8::MAX;
                    self.offset = 0;
                    MarqueePhase::FadeIn { started: now }
                }
            },
            MarqueePhase::FadeIn { started } => match fade_progress(now, started, fade) {
                Some(alpha) => {
                    self.alpha = u8::MAX - alpha;
                    current
                }
                None => {
                    self.alpha = 0;
                    MarqueePhase::Pause { until: now.saturating_add(start_delay) }
                }
            },
        };

        if next.kind() != current.kind() {
            tracing::debug!(
                from = current.kind().as_str(),
                to = next.kind().as_str(),
                offset = self.offset,
                "marquee phase"
            );
        }
        self.phase = Some(next);
        self.offset = self.offset.clamp(0, self.max_offset);
    }

    fn scroll(&mut self, now: u64, freq: u64, last_tick: u64, carry: u64, end_pause: u64) -> MarqueePhase {
        if now <= last_tick {
            return MarqueePhase::Scroll { last_tick, carry };
        }

        let scaled = (now - last_tick)
            .saturating_mul(self.timing.speed_px_per_sec.max(1))
            .saturating_add(carry);
        let advance = scaled / freq;
        let carry = scaled % freq;
        if advance == 0 {
            return MarqueePhase::Scroll { last_tick: now, carry };
        }

        self.offset = self
            .offset
            .saturating_add(i32::try_from(advance).unwrap_or(i32::MAX));
        if self.offset >= self.max_offset {
            self.offset = self.max_offset;
            MarqueePhase::EndPause { until: now.saturating_add(end_pause) }
        } else {
            MarqueePhase::Scroll { last_tick: now, carry }
        }
    }
}

/// Linear 0..255 progress through a fade, or `None` once it is complete.
/// A zero-length fade completes immediately.
fn fade_progress(now: u64, started: u64, duration: u64) -> Option<u8> {
    if duration == 0 {
        return None;
    }
    let elapsed = now.saturating_sub(started);
    if elapsed >= duration {
        return None;
    }
    Some((u128::from(elapsed) * 255 / u128::from(duration)) as u8)
}
