// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Submission sources and decoration settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Submission source and decoration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Path or http(s) URL of the submission manifest.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// Prefix prepended (by concatenation) to per-submission resources.
    #[serde(default = "default_media_prefix")]
    pub media_prefix: String,

    /// Whether the decorative particle background is drawn.
    #[serde(default = "default_particles_enabled")]
    pub particles_enabled: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            media_prefix: default_media_prefix(),
            particles_enabled: default_particles_enabled(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Submission source and decoration settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_manifest_path() -> String {
    DEFAULT_MANIFEST_PATH.to_string()
}

fn default_media_prefix() -> String {
    DEFAULT_MEDIA_PREFIX.to_string()
}

fn default_particles_enabled() -> bool {
    DEFAULT_PARTICLES_ENABLED
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional base directory override.
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
/// the default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                manifest_path: "entries/index.json".to_string(),
                media_prefix: "entries/".to_string(),
                particles_enabled: false,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.manifest_path, DEFAULT_MANIFEST_PATH);
        assert_eq!(config.gallery.media_prefix, DEFAULT_MEDIA_PREFIX);
        assert!(config.gallery.particles_enabled);
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        let content = r#"
[general]
theme_mode = "DARK"
"#;
        let config: Config = toml::from_str(content).expect("should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let content = r#"
[general]
theme_mode = "sepia"
"#;
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_gallery_section_keeps_other_defaults() {
        let content = r#"
[gallery]
particles_enabled = false
"#;
        let config: Config = toml::from_str(content).expect("should parse");
        assert!(!config.gallery.particles_enabled);
        assert_eq!(config.gallery.manifest_path, DEFAULT_MANIFEST_PATH);
        assert_eq!(config.gallery.media_prefix, DEFAULT_MEDIA_PREFIX);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            gallery: GalleryConfig {
                manifest_path: "https://example.test/manifest.json".to_string(),
                media_prefix: "https://example.test/entries/".to_string(),
                particles_enabled: true,
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error"),
            "should warn about parse error"
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn multiple_isolated_config_dirs_dont_interfere() {
        let temp_dir_a = tempdir().expect("create temp dir A");
        let config_a = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        save_with_override(&config_a, Some(temp_dir_a.path().to_path_buf()))
            .expect("save A should succeed");

        let temp_dir_b = tempdir().expect("create temp dir B");
        let config_b = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        save_with_override(&config_b, Some(temp_dir_b.path().to_path_buf()))
            .expect("save B should succeed");

        let (loaded_a, _) = load_with_override(Some(temp_dir_a.path().to_path_buf()));
        let (loaded_b, _) = load_with_override(Some(temp_dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.general.language, Some("fr".to_string()));
        assert_eq!(loaded_b.general.language, Some("es".to_string()));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("[general]"), "should have [general] section");
        assert!(content.contains("[gallery]"), "should have [gallery] section");
    }
}
