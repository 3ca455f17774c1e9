//! Configuration file parsing for devsim
//!
//! Supports:
//! - `.devsim/config.toml` - Storage namespace, preset sets and layout metrics

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_config, save_config};
pub use types::*;
