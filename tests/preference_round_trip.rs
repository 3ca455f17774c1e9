//! Preferences persisted through a real JSON store survive a restart

use std::collections::BTreeSet;
use std::path::Path;
use std::rc::Rc;

use devsim::app::{PresetOverrides, StorageKeys};
use devsim::core::{device, TextScale};
use devsim::store::{KeyValueStore, KeyValueStoreExt, StoredValue};
use devsim::{JsonFileStore, PreferenceStore};
use tempfile::tempdir;

fn open(path: &Path) -> PreferenceStore {
    let store = JsonFileStore::open(path).unwrap();
    PreferenceStore::load(
        Rc::new(store),
        StorageKeys::default(),
        PresetOverrides::default(),
    )
}

#[test]
fn test_selected_device_survives_restart() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("preferences.json");

    for profile in device::all() {
        open(&path).set_selected_device(Some(profile.id));

        let reopened = open(&path);
        assert_eq!(
            reopened.preferences().selected_device.as_deref(),
            Some(profile.id),
            "{} did not round trip",
            profile.id
        );
        assert_eq!(reopened.preferences().effective_device(), profile);
    }
}

#[test]
fn test_full_catalog_enabled_set_round_trips() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("preferences.json");
    let every_id: BTreeSet<String> = device::all().iter().map(|p| p.id.to_string()).collect();

    open(&path).set_enabled_devices(every_id.iter().cloned());

    assert_eq!(open(&path).preferences().enabled_devices, every_id);
}

#[test]
fn test_empty_enabled_set_round_trips() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("preferences.json");

    open(&path).set_enabled_devices(Vec::<String>::new());

    assert!(open(&path).preferences().enabled_devices.is_empty());
}

#[test]
fn test_enabled_devices_drop_unknown_ids() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("preferences.json");

    open(&path).set_enabled_devices(["iphone-11", "nokia-3310", "ipad-mini-5th"]);

    let reopened = open(&path);
    let ids: Vec<_> = reopened
        .preferences()
        .enabled_devices
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(ids, vec!["ipad-mini-5th", "iphone-11"]);
}

#[test]
fn test_stored_sets_are_ordered_arrays() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("preferences.json");

    open(&path).set_enabled_locales(["ja_JP", "en_US", "fr_FR"]);

    let raw = JsonFileStore::open(&path).unwrap();
    assert_eq!(
        raw.string_array(&StorageKeys::default().enable_locales),
        Some(vec![
            "en_US".to_string(),
            "fr_FR".to_string(),
            "ja_JP".to_string()
        ])
    );
}

#[test]
fn test_fixture_store_loads_with_fallbacks() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("preferences.json");
    std::fs::write(&path, include_str!("fixtures/preferences.json")).unwrap();

    let loaded = open(&path);
    let prefs = loaded.preferences();

    assert_eq!(prefs.selected_device.as_deref(), Some("iphone-11"));
    assert_eq!(prefs.enabled_devices.len(), 2);
    assert!(prefs.dark_mode);
    assert_eq!(prefs.active_text_scale, TextScale::XxLarge);
    // absent keys use defaults
    assert!(prefs.simulator_enabled);
    assert_eq!(prefs.active_locale, "en_US");
}

#[test]
fn test_other_version_is_ignored() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("preferences.json");

    let store = JsonFileStore::open(&path).unwrap();
    store
        .set("devsim/0.9.0/deviceID", StoredValue::from("iphone-8"))
        .unwrap();
    drop(store);

    assert_eq!(open(&path).preferences().selected_device, None);
}
