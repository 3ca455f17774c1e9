//! # Key-Value Inspector
//!
//! Debugging view over the raw contents of the external store: lists keys
//! split into user and system scopes, decodes values for display, bulk
//! deletes by scope and edits numeric values in place.
//!
//! Keys in devsim's own namespace are never listed, decoded for display or
//! deleted here. Nothing is cached; every call reads the store again.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use devsim_core::prelude::*;
use serde::Serialize;
use url::Url;

use crate::namespace::KeyNamespace;
use crate::store::{KeyValueStore, KeyValueStoreExt};
use crate::value::StoredValue;

/// Keys written by the platform itself
const SYSTEM_KEYS: &[&str] = &[
    "AddingEmojiKeybordHandled",
    "CarCapabilities",
    "MSVLoggingMasterSwitchEnabledKey",
    "PreferredLanguages",
];

/// Key prefixes written by the platform and its frameworks
const SYSTEM_KEY_PREFIXES: &[&str] = &[
    "Apple",
    "com.apple.",
    "internalSettings.",
    "METAL_",
    "INNext",
    "AK",
    "NS",
    "PK",
    "WebKit",
];

/// Which half of the key list a key falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScope {
    User,
    System,
}

impl KeyScope {
    pub fn of(key: &str) -> Self {
        if is_system_key(key) {
            KeyScope::System
        } else {
            KeyScope::User
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KeyScope::User => "User",
            KeyScope::System => "System",
        }
    }
}

impl fmt::Display for KeyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn is_system_key(key: &str) -> bool {
    SYSTEM_KEYS.contains(&key) || SYSTEM_KEY_PREFIXES.iter().any(|p| key.starts_with(p))
}

/// Where a decoded JSON object came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonSource {
    /// Raw bytes holding a JSON document
    Binary,
    /// A string wrapped in `{` and `}`
    String,
}

/// A stored value interpreted for display
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Url(Url),
    Dictionary(BTreeMap<String, StoredValue>),
    JsonObject {
        object: serde_json::Map<String, serde_json::Value>,
        source: JsonSource,
    },
    Raw(StoredValue),
}

impl DecodedValue {
    /// Short label for list rows
    pub fn kind(&self) -> &'static str {
        match self {
            DecodedValue::Url(_) => "url",
            DecodedValue::Dictionary(_) => "dictionary",
            DecodedValue::JsonObject {
                source: JsonSource::Binary,
                ..
            } => "json data",
            DecodedValue::JsonObject {
                source: JsonSource::String,
                ..
            } => "json string",
            DecodedValue::Raw(value) => value.kind(),
        }
    }
}

/// One listed key with its decoded value
#[derive(Debug, Clone, PartialEq)]
pub struct StoredKeyEntry {
    pub key: String,
    pub scope: KeyScope,
    pub value: DecodedValue,
}

/// Read/delete view over an external store
pub struct Inspector {
    store: Rc<dyn KeyValueStore>,
    namespace: KeyNamespace,
}

impl fmt::Debug for Inspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspector")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl Inspector {
    pub fn new(store: Rc<dyn KeyValueStore>, namespace: KeyNamespace) -> Self {
        Self { store, namespace }
    }

    /// Keys in `scope`, sorted, excluding devsim's own
    pub fn list_keys(&self, scope: KeyScope) -> Vec<String> {
        let mut keys: Vec<String> = self
            .store
            .keys()
            .into_iter()
            .filter(|key| !self.namespace.owns(key))
            .filter(|key| KeyScope::of(key) == scope)
            .collect();
        keys.sort();
        keys
    }

    /// Decode a value for display
    ///
    /// Interpretations are tried in order: binary URL, dictionary, binary
    /// JSON object, `{...}` JSON string, raw value. Returns `None` if the key
    /// is absent.
    pub fn decode(&self, key: &str) -> Option<DecodedValue> {
        let value = self.store.get(key)?;

        if matches!(value, StoredValue::Data(_)) {
            if let Some(url) = self.store.url(key) {
                return Some(DecodedValue::Url(url));
            }
        }

        let json = match &value {
            StoredValue::Dictionary(map) => return Some(DecodedValue::Dictionary(map.clone())),
            StoredValue::Data(bytes) => {
                json_object(bytes).map(|object| (object, JsonSource::Binary))
            }
            StoredValue::String(text) if text.starts_with('{') && text.ends_with('}') => {
                json_object(text.as_bytes()).map(|object| (object, JsonSource::String))
            }
            _ => None,
        };

        Some(match json {
            Some((object, source)) => DecodedValue::JsonObject { object, source },
            None => DecodedValue::Raw(value),
        })
    }

    /// List and decode every key in `scope`
    pub fn entries(&self, scope: KeyScope) -> Vec<StoredKeyEntry> {
        self.list_keys(scope)
            .into_iter()
            .filter_map(|key| {
                let value = self.decode(&key)?;
                Some(StoredKeyEntry { key, scope, value })
            })
            .collect()
    }

    /// Delete every key in `scope`, returning how many were removed
    pub fn remove_all(&self, scope: KeyScope) -> Result<usize> {
        let keys = self.list_keys(scope);
        for key in &keys {
            self.store.remove(key)?;
        }
        info!("Removed {} {} keys", keys.len(), scope.label().to_lowercase());
        Ok(keys.len())
    }

    /// Replace a numeric value with `text` parsed as the same kind of number
    ///
    /// Nothing is written unless the text parses.
    pub fn edit_number(&self, key: &str, text: &str) -> Result<StoredValue> {
        let current = self
            .store
            .get(key)
            .ok_or_else(|| Error::missing_key(key))?;
        let text = text.trim();

        let updated = match current {
            StoredValue::Integer(_) => text.parse::<i64>().map(StoredValue::Integer).map_err(|e| {
                Error::invalid_edit(key, format!("'{}' is not an integer: {}", text, e))
            })?,
            StoredValue::Float(_) => match text.parse::<f64>() {
                Ok(n) if n.is_finite() => StoredValue::Float(n),
                _ => {
                    return Err(Error::invalid_edit(
                        key,
                        format!("'{}' is not a finite number", text),
                    ))
                }
            },
            other => {
                return Err(Error::invalid_edit(
                    key,
                    format!("{} values can't be edited as numbers", other.kind()),
                ))
            }
        };

        self.store.set(key, updated.clone())?;
        debug!("Edited {} = {:?}", key, updated);
        Ok(updated)
    }
}

fn json_object(bytes: &[u8]) -> Option<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_slice(bytes).ok()? {
        serde_json::Value::Object(object) => Some(object),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn inspector_with(entries: Vec<(&str, StoredValue)>) -> (Rc<MemoryStore>, Inspector) {
        let store = Rc::new(MemoryStore::with_entries(entries));
        let inspector = Inspector::new(store.clone(), KeyNamespace::default());
        (store, inspector)
    }

    #[test]
    fn test_partition_excludes_own_namespace() {
        let (_, inspector) = inspector_with(vec![
            ("AppleLanguages", StoredValue::string_array(["en"])),
            ("NSFoo", StoredValue::Bool(true)),
            ("PreferredLanguages", StoredValue::string_array(["en"])),
            ("myKey", StoredValue::Integer(1)),
            ("devsim/1.0.0/dark", StoredValue::Bool(true)),
            ("devsim/0.9.0/dark", StoredValue::Bool(true)),
        ]);

        assert_eq!(inspector.list_keys(KeyScope::User), vec!["myKey"]);
        assert_eq!(
            inspector.list_keys(KeyScope::System),
            vec!["AppleLanguages", "NSFoo", "PreferredLanguages"]
        );
    }

    #[test]
    fn test_keys_are_sorted() {
        let (_, inspector) = inspector_with(vec![
            ("zeta", StoredValue::Integer(1)),
            ("alpha", StoredValue::Integer(2)),
            ("mid", StoredValue::Integer(3)),
        ]);
        assert_eq!(inspector.list_keys(KeyScope::User), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_remove_all_user_leaves_system_and_own() {
        let (store, inspector) = inspector_with(vec![
            ("AppleLanguages", StoredValue::string_array(["en"])),
            ("myKey", StoredValue::Integer(1)),
            ("other", StoredValue::from("x")),
            ("devsim/1.0.0/dark", StoredValue::Bool(true)),
        ]);

        assert_eq!(inspector.remove_all(KeyScope::User).unwrap(), 2);
        assert!(inspector.list_keys(KeyScope::User).is_empty());
        assert!(store.get("AppleLanguages").is_some());
        assert!(store.get("devsim/1.0.0/dark").is_some());
    }

    #[test]
    fn test_decode_json_string() {
        let (_, inspector) = inspector_with(vec![(
            "color",
            StoredValue::from(r#"{"rawValue":{"red":0}}"#),
        )]);

        match inspector.decode("color") {
            Some(DecodedValue::JsonObject { object, source }) => {
                assert_eq!(source, JsonSource::String);
                assert!(object.contains_key("rawValue"));
            }
            other => panic!("expected JSON object, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_json_string_that_is_not_json_is_raw() {
        let (_, inspector) = inspector_with(vec![("s", StoredValue::from("{not json}"))]);
        assert_eq!(
            inspector.decode("s"),
            Some(DecodedValue::Raw(StoredValue::from("{not json}")))
        );
    }

    #[test]
    fn test_decode_binary_json_and_url() {
        let (_, inspector) = inspector_with(vec![
            ("json", StoredValue::Data(br#"{"a":1}"#.to_vec())),
            ("link", StoredValue::Data(b"https://example.com".to_vec())),
            ("array", StoredValue::Data(b"[1,2]".to_vec())),
        ]);

        assert!(matches!(
            inspector.decode("json"),
            Some(DecodedValue::JsonObject {
                source: JsonSource::Binary,
                ..
            })
        ));
        assert!(matches!(inspector.decode("link"), Some(DecodedValue::Url(_))));
        assert!(matches!(
            inspector.decode("array"),
            Some(DecodedValue::Raw(StoredValue::Data(_)))
        ));
    }

    #[test]
    fn test_decode_scheme_like_data_is_raw() {
        let (_, inspector) = inspector_with(vec![("pair", StoredValue::Data(b"key:value".to_vec()))]);
        assert_eq!(
            inspector.decode("pair"),
            Some(DecodedValue::Raw(StoredValue::Data(b"key:value".to_vec())))
        );
    }

    #[test]
    fn test_decode_url_string_is_raw() {
        // URLs are only recognized in binary form
        let (_, inspector) = inspector_with(vec![("s", StoredValue::from("https://example.com"))]);
        assert!(matches!(
            inspector.decode("s"),
            Some(DecodedValue::Raw(StoredValue::String(_)))
        ));
    }

    #[test]
    fn test_decode_dictionary_and_missing() {
        let mut map = BTreeMap::new();
        map.insert("k".to_string(), StoredValue::Bool(true));
        let (_, inspector) = inspector_with(vec![("dict", StoredValue::Dictionary(map.clone()))]);

        assert_eq!(inspector.decode("dict"), Some(DecodedValue::Dictionary(map)));
        assert_eq!(inspector.decode("missing"), None);
    }

    #[test]
    fn test_entries_carry_scope() {
        let (_, inspector) = inspector_with(vec![
            ("NSFoo", StoredValue::Bool(true)),
            ("count", StoredValue::Integer(2)),
        ]);

        let entries = inspector.entries(KeyScope::System);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "NSFoo");
        assert_eq!(entries[0].scope, KeyScope::System);
        assert_eq!(entries[0].value.kind(), "bool");
    }

    #[test]
    fn test_edit_number_keeps_kind() {
        let (store, inspector) = inspector_with(vec![
            ("count", StoredValue::Integer(2)),
            ("ratio", StoredValue::Float(0.5)),
        ]);

        assert_eq!(
            inspector.edit_number("count", " 42 ").unwrap(),
            StoredValue::Integer(42)
        );
        assert_eq!(store.get("count"), Some(StoredValue::Integer(42)));

        inspector.edit_number("ratio", "1.25").unwrap();
        assert_eq!(store.get("ratio"), Some(StoredValue::Float(1.25)));
    }

    #[test]
    fn test_edit_number_rejects_without_writing() {
        let (store, inspector) = inspector_with(vec![
            ("count", StoredValue::Integer(2)),
            ("name", StoredValue::from("x")),
        ]);

        let err = inspector.edit_number("count", "1.5").unwrap_err();
        assert!(matches!(err, Error::InvalidEdit { .. }));
        assert_eq!(store.get("count"), Some(StoredValue::Integer(2)));

        assert!(matches!(
            inspector.edit_number("name", "3"),
            Err(Error::InvalidEdit { .. })
        ));
        assert!(matches!(
            inspector.edit_number("missing", "3"),
            Err(Error::MissingKey { .. })
        ));
    }
}
