//! Marquee configuration persistence.
//!
//! Timing and fade-hint tunables stored as JSON at
//! `~/.config/overflow-text/config.json`. Every field has a default, so a
//! partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Result;

/// Persisted marquee tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Pause before scrolling starts (and after each fade-in).
    #[serde(default = "default_start_delay")]
    pub start_delay_ms: u64,
    /// Pause at the end of the text before fading out.
    #[serde(default = "default_fade_or_pause")]
    pub end_pause_ms: u64,
    /// Duration of each fade direction.
    #[serde(default = "default_fade_or_pause")]
    pub fade_duration_ms: u64,
    #[serde(default = "default_speed")]
    pub speed_px_per_sec: u64,
    /// Width of one fade hint band when the box is wide enough for all three.
    #[serde(default = "default_band_width")]
    pub fade_band_width: i32,
    /// Band opacity moving toward the trailing edge.
    #[serde(default = "default_band_alphas")]
    pub fade_band_alphas: [u8; 3],
}

fn default_start_delay() -> u64 { 2000 }
fn default_fade_or_pause() -> u64 { 260 }
fn default_speed() -> u64 { 72 }
fn default_band_width() -> i32 { 14 }
fn default_band_alphas() -> [u8; 3] { [70, 130, 200] }

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: default_start_delay(),
            end_pause_ms: default_fade_or_pause(),
            fade_duration_ms: default_fade_or_pause(),
            speed_px_per_sec: default_speed(),
            fade_band_width: default_band_width(),
            fade_band_alphas: default_band_alphas(),
        }
    }
}

impl MarqueeConfig {
    /// Default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("overflow-text")
            .join("config.json")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from disk, falling back to defaults on any error.
    pub fn load(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default marquee config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Persist config to disk, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Width of each fade hint band for a box of `box_width` pixels.
    ///
    /// Narrow boxes split their width into three equal bands instead. A
    /// non-positive configured width disables the bands.
    pub fn band_width(&self, box_width: i32) -> i32 {
        let full = self.fade_band_width.max(0);
        if box_width <= 0 {
            0
        } else if box_width >= full.saturating_mul(3) {
            full
        } else {
            box_width / 3
        }
    }
}
