//! Caller-facing configuration with defaults applied.
//!
//! Every field is optional in TOML; missing ones take the defaults below, so a
//! preset can override just `animation = "slide"`.

use std::path::Path;
use std::time::Duration;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::constants::*;
use crate::core::animation::{AnimationKind, Transition};
use crate::error::{CarouselError, Result};

/// Visual override for one element (nav button, wrapper, indicator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementStyle {
    pub color: Option<[u8; 3]>,
    pub background: Option<[u8; 3]>,
    pub size: Option<f32>,
    pub margin: Option<f32>,
    /// Accessible label.
    pub label: Option<String>,
}

impl ElementStyle {
    /// Fields set on `over` win; unset ones fall back to `self`.
    pub fn merged(&self, over: &ElementStyle) -> ElementStyle {
        ElementStyle {
            color: over.color.or(self.color),
            background: over.background.or(self.background),
            size: over.size.or(self.size),
            margin: over.margin.or(self.margin),
            label: over.label.clone().or_else(|| self.label.clone()),
        }
    }

    pub fn color_or(&self, fallback: [u8; 3]) -> Color32 {
        let [r, g, b] = self.color.unwrap_or(fallback);
        Color32::from_rgb(r, g, b)
    }

    pub fn background_or(&self, fallback: [u8; 3]) -> Color32 {
        let [r, g, b] = self.background.unwrap_or(fallback);
        Color32::from_rgb(r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    pub index: usize,
    pub strict_indexing: bool,

    pub auto_play: bool,
    pub stop_auto_play_on_hover: bool,
    pub interval_ms: u64,

    pub animation: AnimationKind,
    /// Falls back to the animation's own default when unset.
    pub duration_ms: Option<u64>,
    /// Fixed container height; measured from the active slide when unset.
    pub height: Option<f32>,

    pub swipe: bool,

    pub nav_buttons_always_invisible: bool,
    pub nav_buttons_always_visible: bool,
    pub cycle_navigation: bool,
    pub full_height_hover: bool,
    pub next_icon: String,
    pub prev_icon: String,

    pub indicators: bool,
    pub indicator_icon: String,

    pub change_on_first_render: bool,
    pub height_retry_limit: u32,

    // Tables last so the TOML output stays valid.
    pub nav_buttons: ElementStyle,
    pub nav_buttons_wrapper: ElementStyle,
    pub indicator_container: ElementStyle,
    pub indicator_button: ElementStyle,
    pub active_indicator_button: ElementStyle,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            index: 0,
            strict_indexing: true,
            auto_play: true,
            stop_auto_play_on_hover: true,
            interval_ms: DEFAULT_INTERVAL_MS,
            animation: AnimationKind::Fade,
            duration_ms: None,
            height: None,
            swipe: true,
            nav_buttons_always_invisible: false,
            nav_buttons_always_visible: false,
            cycle_navigation: true,
            full_height_hover: true,
            next_icon: DEFAULT_NEXT_ICON.to_owned(),
            prev_icon: DEFAULT_PREV_ICON.to_owned(),
            indicators: true,
            indicator_icon: DEFAULT_INDICATOR_ICON.to_owned(),
            change_on_first_render: false,
            height_retry_limit: DEFAULT_HEIGHT_RETRY_LIMIT,
            nav_buttons: ElementStyle::default(),
            nav_buttons_wrapper: ElementStyle::default(),
            indicator_container: ElementStyle::default(),
            indicator_button: ElementStyle::default(),
            active_indicator_button: ElementStyle::default(),
        }
    }
}

impl CarouselOptions {
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
            .unwrap_or_else(|| self.animation.default_duration_ms())
    }

    pub fn transition(&self) -> Transition {
        Transition::from_millis(self.duration_ms())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Style for indicator `i`, with the active override merged on top.
    pub fn indicator_style(&self, is_active: bool) -> ElementStyle {
        if is_active {
            self.indicator_button.merged(&self.active_indicator_button)
        } else {
            self.indicator_button.clone()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CarouselError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| CarouselError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
