// SPDX-License-Identifier: MPL-2.0
//! User settings read from `settings.toml` at start-up.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Viewport background, image cache size, drop coalescing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `DICOM_DROP_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use dicom_drop::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("cache holds {} images", config.image_cache_capacity());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Color behind the drawn image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    #[default]
    Dark,
}

// =============================================================================
// Section Structs
// =============================================================================

/// `[general]`: locale and light/dark preference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Locale tried after `--lang`, before the OS locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub theme_mode: ThemeMode,
}

/// Viewport settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundTheme>,

    /// Number of decoded images the rendering engine keeps.
    #[serde(
        default = "default_image_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_capacity: Option<usize>,

    /// Milliseconds during which extra drops belong to the same gesture.
    #[serde(
        default = "default_drop_coalesce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub drop_coalesce_ms: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            background: Some(BackgroundTheme::default()),
            image_cache_capacity: default_image_cache_capacity(),
            drop_coalesce_ms: default_drop_coalesce_ms(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl Config {
    /// Cache capacity clamped to the supported range.
    #[must_use]
    pub fn image_cache_capacity(&self) -> usize {
        self.viewer
            .image_cache_capacity
            .unwrap_or(DEFAULT_IMAGE_CACHE_CAPACITY)
            .clamp(MIN_IMAGE_CACHE_CAPACITY, MAX_IMAGE_CACHE_CAPACITY)
    }

    #[must_use]
    pub fn drop_coalesce_window(&self) -> Duration {
        Duration::from_millis(
            self.viewer
                .drop_coalesce_ms
                .unwrap_or(DEFAULT_DROP_COALESCE_MS)
                .min(MAX_DROP_COALESCE_MS),
        )
    }

    #[must_use]
    pub fn background(&self) -> BackgroundTheme {
        self.viewer.background.unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_image_cache_capacity() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_CAPACITY)
}

fn default_drop_coalesce_ms() -> Option<u64> {
    Some(DEFAULT_DROP_COALESCE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
