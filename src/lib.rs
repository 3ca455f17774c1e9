//! devsim Library
//!
//! Preview an embedded app under simulated devices, locales, calendars,
//! appearances and text scales.
//!
//! This crate re-exports the workspace crates:
//! - [`core`] - Device catalog, layout resolver, registries, errors, logging
//! - [`store`] - Key-value store seam, bundled adapters, inspector
//! - [`app`] - Configuration, preference store, overlay projection

pub use devsim_app as app;
pub use devsim_core as core;
pub use devsim_store as store;

// Re-export main entry points
pub use devsim_app::{OverlayFrame, OverlaySession, PreferenceStore, UserPreferences};
pub use devsim_core::{Error, Result};
pub use devsim_store::{Inspector, JsonFileStore, KeyValueStore, MemoryStore};
