//! Wiring of config, preference store and inspector for one overlay

use std::path::Path;
use std::rc::Rc;

use devsim_core::prelude::*;
use devsim_core::Size;
use devsim_store::{Inspector, JsonFileStore, KeyValueStore};

use crate::config::{load_config, OverlayConfig};
use crate::keys::StorageKeys;
use crate::overlay::OverlayFrame;
use crate::preferences::{PreferenceStore, PresetOverrides};

/// Everything one overlay instance needs, bound to a single store
#[derive(Debug)]
pub struct OverlaySession {
    config: OverlayConfig,
    preferences: PreferenceStore,
    inspector: Inspector,
}

impl OverlaySession {
    pub fn new(store: Rc<dyn KeyValueStore>, config: OverlayConfig) -> Self {
        let namespace = config.storage.namespace();
        let overrides = PresetOverrides::from(&config.presets);
        let preferences =
            PreferenceStore::load(store.clone(), StorageKeys::new(&namespace), overrides);
        let inspector = Inspector::new(store, namespace);

        Self {
            config,
            preferences,
            inspector,
        }
    }

    /// Load `.devsim/config.toml` from `project_path` and open the JSON store
    /// it names (or the default one)
    pub fn open(project_path: &Path) -> Result<Self> {
        let config = load_config(project_path);
        let store = match &config.storage.file {
            Some(file) => JsonFileStore::open(project_path.join(file)),
            None => JsonFileStore::open_default(),
        }
        .context("Failed to open preference store")?;

        info!("Opened overlay session with store {:?}", store.path());
        Ok(Self::new(Rc::new(store), config))
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceStore {
        &mut self.preferences
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    /// Project the current preferences onto a viewport
    pub fn project(&self, viewport: Size) -> OverlayFrame {
        OverlayFrame::project(
            self.preferences.preferences(),
            viewport,
            &self.config.layout,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{save_config, OverlayConfig};
    use devsim_store::{KeyScope, MemoryStore, StoredValue};
    use tempfile::tempdir;

    #[test]
    fn test_session_uses_configured_namespace() {
        let store = Rc::new(MemoryStore::with_entries([
            ("acme/1/dark", StoredValue::Bool(true)),
            ("devsim/1.0.0/dark", StoredValue::Bool(false)),
        ]));
        let mut config = OverlayConfig::default();
        config.storage.owner = "acme".into();
        config.storage.version = "1".into();

        let session = OverlaySession::new(store, config);
        assert!(session.preferences().preferences().dark_mode);
        // foreign namespaces are user keys to the inspector
        assert_eq!(
            session.inspector().list_keys(KeyScope::User),
            vec!["devsim/1.0.0/dark"]
        );
    }

    #[test]
    fn test_open_with_project_store_file() {
        let temp = tempdir().unwrap();
        let mut config = OverlayConfig::default();
        config.storage.file = Some("prefs.json".into());
        save_config(temp.path(), &config).unwrap();

        {
            let mut session = OverlaySession::open(temp.path()).unwrap();
            session.preferences_mut().set_dual_mode(true);
        }

        assert!(temp.path().join("prefs.json").exists());
        let session = OverlaySession::open(temp.path()).unwrap();
        assert!(session.preferences().preferences().dual_mode);
        assert!(session.project(Size::new(1200.0, 1400.0)).is_simulated());
    }
}
