//! Test helpers for crates that depend on the store seam
//!
//! Enabled for this crate's own tests and, in other crates, through the
//! `test-helpers` feature.

use std::rc::Rc;

use devsim_core::Result;

use crate::store::{KeyValueStore, MemoryStore};
use crate::value::StoredValue;

mockall::mock! {
    /// Mocked [`KeyValueStore`] for verifying exact reads and writes
    pub KeyValueStore {}

    impl KeyValueStore for KeyValueStore {
        fn get(&self, key: &str) -> Option<StoredValue>;
        fn set(&self, key: &str, value: StoredValue) -> Result<()>;
        fn remove(&self, key: &str) -> Result<()>;
        fn keys(&self) -> Vec<String>;
    }
}

/// Shared in-memory store pre-populated with entries
pub fn memory_store<'a, I>(entries: I) -> Rc<MemoryStore>
where
    I: IntoIterator<Item = (&'a str, StoredValue)>,
{
    Rc::new(MemoryStore::with_entries(entries))
}

/// A mock that behaves like an empty store for reads
///
/// Callers add their own `expect_set` / `expect_remove` expectations.
pub fn empty_mock() -> MockKeyValueStore {
    let mut mock = MockKeyValueStore::new();
    mock.expect_get().returning(|_| None);
    mock.expect_keys().returning(Vec::new);
    mock
}
