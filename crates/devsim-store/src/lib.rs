//! # devsim-store - External Key-Value Store
//!
//! The seam between devsim and whatever preference store the host provides.
//!
//! ## Public API
//!
//! - [`KeyValueStore`] - Raw get/set/remove/keys; [`KeyValueStoreExt`] adds
//!   typed reads
//! - [`StoredValue`] - Property-list style value
//! - [`MemoryStore`], [`JsonFileStore`] - Bundled adapters
//! - [`KeyNamespace`] - The `<owner>/<version>/` prefix devsim writes under
//! - [`Inspector`] - Lists, decodes, deletes and edits foreign keys

pub mod file_store;
pub mod inspector;
pub mod namespace;
pub mod store;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod value;

pub use file_store::{default_store_path, JsonFileStore};
pub use inspector::{
    is_system_key, DecodedValue, Inspector, JsonSource, KeyScope, StoredKeyEntry,
};
pub use namespace::{KeyNamespace, DEFAULT_OWNER, DEFAULT_VERSION};
pub use store::{KeyValueStore, KeyValueStoreExt, MemoryStore};
pub use value::StoredValue;
