//! Loading and saving `.devsim/config.toml`

use std::path::{Path, PathBuf};

use devsim_core::prelude::*;

use super::types::OverlayConfig;

const DEVSIM_DIR: &str = ".devsim";
const CONFIG_FILENAME: &str = "config.toml";

/// Path of the config file for a project
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(DEVSIM_DIR).join(CONFIG_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load configuration from .devsim/config.toml
///
/// Returns the default configuration if the file doesn't exist or can't be
/// parsed.
pub fn load_config(project_path: &Path) -> OverlayConfig {
    let path = config_path(project_path);

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return OverlayConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                OverlayConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            OverlayConfig::default()
        }
    }
}

/// Create .devsim/config.toml with commented defaults, if missing
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let devsim_dir = project_path.join(DEVSIM_DIR);

    if !devsim_dir.exists() {
        std::fs::create_dir_all(&devsim_dir)
            .map_err(|e| Error::config(format!("Failed to create .devsim dir: {}", e)))?;
    }

    let path = devsim_dir.join(CONFIG_FILENAME);
    if !path.exists() {
        let default_content = r#"# devsim configuration

[storage]
owner = "devsim"
version = "1.0.0"       # Bump when the stored encoding changes
# file = "/path/to/preferences.json"   # Default: platform data dir

[presets]
# Sets listed here replace whatever was stored for that field
# devices = ["iphone-se-2nd", "iphone-13-pro-max"]
# locales = ["en_US", "ja_JP"]
# calendars = ["iso8601", "japanese"]
# time_zones = ["Asia/Tokyo", "America/New_York"]

[layout]
toolbar_height = 64.0
portrait_spacing = 24.0     # Dual mode, side by side
landscape_spacing = 64.0    # Dual mode, stacked
information_offset = 24.0
content_offset = -32.0
"#;
        std::fs::write(&path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", path);
    }

    Ok(())
}

/// Save configuration to .devsim/config.toml
///
/// Uses atomic write (temp file + rename).
pub fn save_config(project_path: &Path, config: &OverlayConfig) -> Result<()> {
    let devsim_dir = project_path.join(DEVSIM_DIR);

    if !devsim_dir.exists() {
        std::fs::create_dir_all(&devsim_dir)
            .map_err(|e| Error::config(format!("Failed to create .devsim dir: {}", e)))?;
    }

    let path = devsim_dir.join(CONFIG_FILENAME);
    let temp_path = devsim_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
    let full_content = format!("# devsim configuration\n\n{}", content);

    std::fs::write(&temp_path, full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved config to {:?}", path);
    Ok(())
}
