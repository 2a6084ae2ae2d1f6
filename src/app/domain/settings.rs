use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::visual_state::WIDE_LAYOUT_THRESHOLD;
use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

impl ThemeMode {
    /// Resolve to a concrete dark/light answer, asking the platform for `SystemDefault`.
    pub fn is_dark(&self, system_dark: impl FnOnce() -> bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => system_dark(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub distraction_free: bool,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    /// Quiet period before the preview re-renders, also used for the
    /// snapshot restore delay.
    #[serde(default = "default_preview_delay_ms")]
    pub preview_delay_ms: u64,

    #[serde(default = "default_wide_layout_threshold")]
    pub wide_layout_threshold: i32,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font_size() -> u32 {
    16
}

fn default_word_wrap() -> bool {
    true
}

fn default_preview_delay_ms() -> u64 {
    500
}

fn default_wide_layout_threshold() -> i32 {
    WIDE_LAYOUT_THRESHOLD
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            distraction_free: false,
            theme_mode: default_theme_mode(),
            font_size: default_font_size(),
            word_wrap_enabled: default_word_wrap(),
            preview_delay_ms: default_preview_delay_ms(),
            wide_layout_threshold: default_wide_layout_threshold(),
        }
    }
}

impl AppSettings {
    pub fn preview_delay(&self) -> Duration {
        Duration::from_millis(self.preview_delay_ms)
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    log::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if self.font_size == 0 {
            return Err(AppError::Settings("font size must be positive".to_string()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("markpad");
        path.push("settings.json");
        path
    }
}
