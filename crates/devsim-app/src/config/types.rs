//! Configuration types for devsim
//!
//! Defines:
//! - `OverlayConfig` - Root of `.devsim/config.toml`
//! - `StorageSettings`, `PresetSettings`, `LayoutSettings` - Its sections

use std::path::PathBuf;

use devsim_store::{KeyNamespace, DEFAULT_OWNER, DEFAULT_VERSION};
use serde::{Deserialize, Serialize};

/// Root configuration (`.devsim/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OverlayConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub presets: PresetSettings,

    #[serde(default)]
    pub layout: LayoutSettings,
}

/// Where preferences are persisted
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Owner segment of the key namespace
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Version segment; bump when the stored encoding changes
    #[serde(default = "default_version")]
    pub version: String,

    /// JSON store file (None = platform data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            version: default_version(),
            file: None,
        }
    }
}

impl StorageSettings {
    pub fn namespace(&self) -> KeyNamespace {
        KeyNamespace::new(&self.owner, &self.version)
    }
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// Host-supplied default sets
///
/// A set given here wins over whatever is stored for that field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PresetSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendars: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zones: Option<Vec<String>>,
}

/// Overlay chrome metrics, in logical points
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LayoutSettings {
    #[serde(default = "default_toolbar_height")]
    pub toolbar_height: f64,

    /// Gap between the two screens in dual mode, portrait
    #[serde(default = "default_portrait_spacing")]
    pub portrait_spacing: f64,

    /// Gap between the two screens in dual mode, landscape
    #[serde(default = "default_landscape_spacing")]
    pub landscape_spacing: f64,

    /// Distance of the header/footer text from the device frame
    #[serde(default = "default_information_offset")]
    pub information_offset: f64,

    /// Vertical shift applied to the simulated screen
    #[serde(default = "default_content_offset")]
    pub content_offset: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            toolbar_height: default_toolbar_height(),
            portrait_spacing: default_portrait_spacing(),
            landscape_spacing: default_landscape_spacing(),
            information_offset: default_information_offset(),
            content_offset: default_content_offset(),
        }
    }
}

fn default_toolbar_height() -> f64 {
    64.0
}

fn default_portrait_spacing() -> f64 {
    24.0
}

fn default_landscape_spacing() -> f64 {
    64.0
}

fn default_information_offset() -> f64 {
    24.0
}

fn default_content_offset() -> f64 {
    -32.0
}
