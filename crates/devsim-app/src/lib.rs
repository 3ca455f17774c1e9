//! devsim-app - Preference state, configuration and overlay projection
//!
//! Binds the domain types from `devsim-core` to an external store from
//! `devsim-store`: loads and persists [`UserPreferences`], notifies
//! subscribers on change, and projects the result onto the live viewport as
//! an [`OverlayFrame`].

pub mod config;
pub mod keys;
pub mod overlay;
pub mod preferences;
pub mod session;

// Re-export primary types
pub use config::{LayoutSettings, OverlayConfig, PresetSettings, StorageSettings};
pub use keys::StorageKeys;
pub use overlay::{
    ButtonState, ColorScheme, InformationText, OverlayFrame, RenderEnvironment,
    ScreenArrangement, SimulatedOverlay, SimulatedScreen, TextScaleSlider, Toolbar,
};
pub use preferences::{
    PreferenceChange, PreferenceStore, PresetOverrides, SubscriptionId, UserPreferences,
};
pub use session::OverlaySession;
