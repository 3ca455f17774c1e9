//! Key-value store persisted as a single JSON document

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use devsim_core::prelude::*;

use crate::store::KeyValueStore;
use crate::value::StoredValue;

const STORE_DIR: &str = "devsim";
const STORE_FILENAME: &str = "preferences.json";

/// Default store location: `<data_local_dir>/devsim/preferences.json`
pub fn default_store_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(STORE_DIR).join(STORE_FILENAME))
}

/// Store backed by a JSON file
///
/// The whole map is held in memory and rewritten on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, StoredValue>>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file starts an empty store. Entries that don't decode are
    /// dropped one by one. A file that isn't a JSON object at all is moved
    /// aside to `<path>.corrupt` before starting empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&content) {
                Ok(raw) => {
                    debug!("Loaded key-value store from {:?}", path);
                    decode_entries(raw, &path)
                }
                Err(e) => {
                    let backup = corrupt_path(&path);
                    std::fs::rename(&path, &backup).map_err(|err| {
                        Error::storage(format!("Failed to move aside {:?}: {}", path, err))
                    })?;
                    warn!(
                        "Failed to parse {:?}, moved to {:?} and starting empty: {}",
                        path, backup, e
                    );
                    BTreeMap::new()
                }
            }
        } else {
            debug!("No store file at {:?}, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    /// Open the store at [`default_store_path`]
    pub fn open_default() -> Result<Self> {
        let path = default_store_path()
            .ok_or_else(|| Error::storage("Could not determine local data directory"))?;
        info!("Using key-value store at {:?}", path);
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current map to disk (temp file + rename)
    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::storage(format!("Failed to create {:?}: {}", parent, e))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(&*self.entries.borrow())?;
        let temp_path = self.path.with_extension("json.tmp");

        std::fs::write(&temp_path, content)
            .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))?;

        trace!("Flushed key-value store to {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<StoredValue> {
        self.entries.borrow().get(key).cloned()
    }

    /// Non-finite floats have no JSON form and are refused
    fn set(&self, key: &str, value: StoredValue) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::storage(format!(
                "Refusing to store non-finite number under {}",
                key
            )));
        }
        self.entries.borrow_mut().insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.entries.borrow_mut().remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

fn decode_entries(
    raw: BTreeMap<String, serde_json::Value>,
    path: &Path,
) -> BTreeMap<String, StoredValue> {
    raw.into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(value) => Some((key, value)),
            Err(e) => {
                warn!("Dropping undecodable entry {:?} in {:?}: {}", key, path, e);
                None
            }
        })
        .collect()
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    PathBuf::from(name)
}
