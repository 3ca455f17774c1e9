//! The external key-value store seam
//!
//! [`KeyValueStore`] is the only way the rest of devsim touches persisted
//! state. Typed accessors live on [`KeyValueStoreExt`], which is implemented
//! for every store, so adapters only provide the four raw operations.

use std::cell::RefCell;
use std::collections::BTreeMap;

use devsim_core::prelude::*;
use url::Url;

use crate::value::StoredValue;

/// Raw operations of an external key-value store
///
/// Methods take `&self`: stores are shared through `Rc<dyn KeyValueStore>`
/// and use interior mutability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<StoredValue>;

    fn set(&self, key: &str, value: StoredValue) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Every key currently present, in no particular order
    fn keys(&self) -> Vec<String>;
}

/// Typed reads on top of [`KeyValueStore`]
///
/// Every accessor returns `None` on a missing key or a shape mismatch.
pub trait KeyValueStoreExt: KeyValueStore {
    fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            StoredValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// An array whose elements are all strings
    fn string_array(&self, key: &str) -> Option<Vec<String>> {
        self.get(key)?.to_string_array()
    }

    fn bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            StoredValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    fn dictionary(&self, key: &str) -> Option<BTreeMap<String, StoredValue>> {
        match self.get(key)? {
            StoredValue::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    fn data(&self, key: &str) -> Option<Vec<u8>> {
        match self.get(key)? {
            StoredValue::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// An absolute URL stored as UTF-8 data or as a string
    ///
    /// Only URLs with a host, or `file:` URLs, count; text such as
    /// `key:value` is not a URL here.
    fn url(&self, key: &str) -> Option<Url> {
        let text = match self.get(key)? {
            StoredValue::Data(bytes) => String::from_utf8(bytes).ok()?,
            StoredValue::String(s) => s,
            _ => return None,
        };
        let url = Url::parse(text.trim()).ok()?;
        (url.has_host() || url.scheme() == "file").then_some(url)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStoreExt for T {}

// ─────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────

/// Store that keeps everything in memory
///
/// Useful headless and in tests; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, StoredValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, StoredValue)>,
        K: Into<String>,
    {
        Self {
            entries: RefCell::new(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<StoredValue> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: StoredValue) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}
