//! # Preference Store
//!
//! Holds the current [`UserPreferences`] for one overlay session and writes
//! every change straight through to the external key-value store, one key
//! per field.
//!
//! Loading never fails: each field is decoded independently and falls back
//! to its default when the key is missing or holds the wrong shape. Unknown
//! device, calendar and time-zone ids are dropped on the way in, both from
//! the store and from setters.
//!
//! After a setter has updated memory and persisted its key, every subscriber
//! is called synchronously with the [`PreferenceChange`] and the new state.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use devsim_core::prelude::*;
use devsim_core::{device, locale, DeviceProfile, DeviceSelection, TextScale};
use devsim_store::{KeyValueStore, KeyValueStoreExt, StoredValue};
use serde::Serialize;

use crate::config::PresetSettings;
use crate::keys::StorageKeys;

// ─────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────

/// Everything the user can change from the overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPreferences {
    pub selected_device: Option<String>,
    pub enabled_devices: BTreeSet<String>,
    pub enabled_locales: BTreeSet<String>,
    pub enabled_calendars: BTreeSet<String>,
    pub enabled_time_zones: BTreeSet<String>,

    pub simulator_enabled: bool,
    pub dual_mode: bool,
    pub dark_mode: bool,
    pub display_information: bool,
    pub display_safe_area: bool,
    pub dynamic_type_sizes_enabled: bool,

    pub active_locale: String,
    pub active_calendar: String,
    /// `None` follows the host's time zone
    pub active_time_zone: Option<String>,
    pub active_text_scale: TextScale,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            selected_device: None,
            enabled_devices: owned_set(device::PRESET_DEVICE_IDS),
            enabled_locales: owned_set(locale::PRESET_LOCALES),
            enabled_calendars: owned_set(locale::PRESET_CALENDARS),
            enabled_time_zones: owned_set(locale::PRESET_TIME_ZONES),
            simulator_enabled: true,
            dual_mode: false,
            dark_mode: false,
            display_information: true,
            display_safe_area: true,
            dynamic_type_sizes_enabled: false,
            active_locale: locale::DEFAULT_LOCALE.to_string(),
            active_calendar: locale::DEFAULT_CALENDAR.to_string(),
            active_time_zone: None,
            active_text_scale: TextScale::default(),
        }
    }
}

impl UserPreferences {
    /// Profile of the selected device, if any
    pub fn selected_profile(&self) -> Option<&'static DeviceProfile> {
        self.selected_device.as_deref().and_then(device::lookup)
    }

    /// Selected device, or the catalog default when nothing is selected
    pub fn effective_device(&self) -> &'static DeviceProfile {
        self.selected_profile()
            .unwrap_or_else(device::default_device)
    }

    /// Enabled device profiles in catalog order
    pub fn enabled_profiles(&self) -> Vec<&'static DeviceProfile> {
        device::all()
            .iter()
            .filter(|p| self.enabled_devices.contains(p.id))
            .collect()
    }
}

fn owned_set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Host-supplied default sets
///
/// Each set given here is used as-is for that field, ignoring whatever the
/// store holds. Overrides are not written back to the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetOverrides {
    pub devices: Option<BTreeSet<String>>,
    pub locales: Option<BTreeSet<String>>,
    pub calendars: Option<BTreeSet<String>>,
    pub time_zones: Option<BTreeSet<String>>,
}

impl From<&PresetSettings> for PresetOverrides {
    fn from(settings: &PresetSettings) -> Self {
        let to_set = |ids: &Option<Vec<String>>| ids.as_ref().map(|v| v.iter().cloned().collect());
        Self {
            devices: to_set(&settings.devices),
            locales: to_set(&settings.locales),
            calendars: to_set(&settings.calendars),
            time_zones: to_set(&settings.time_zones),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Change notification
// ─────────────────────────────────────────────────────────────────

/// Which field a setter changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceChange {
    SelectedDevice,
    EnabledDevices,
    EnabledLocales,
    EnabledCalendars,
    EnabledTimeZones,
    SimulatorEnabled,
    DualMode,
    DarkMode,
    DisplayInformation,
    DisplaySafeArea,
    DynamicTypeSizesEnabled,
    ActiveLocale,
    ActiveCalendar,
    ActiveTimeZone,
    ActiveTextScale,
}

/// Handle returned by [`PreferenceStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(PreferenceChange, &UserPreferences)>;

// ─────────────────────────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────────────────────────

/// Preference state bound to an external store
pub struct PreferenceStore {
    store: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
    prefs: UserPreferences,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("keys", &self.keys)
            .field("prefs", &self.prefs)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl PreferenceStore {
    /// Load preferences from `store`
    pub fn load(
        store: Rc<dyn KeyValueStore>,
        keys: StorageKeys,
        overrides: PresetOverrides,
    ) -> Self {
        let prefs = decode(store.as_ref(), &keys, overrides);
        debug!(
            "Loaded preferences: device={:?}, {} devices, {} locales",
            prefs.selected_device,
            prefs.enabled_devices.len(),
            prefs.enabled_locales.len()
        );

        Self {
            store,
            keys,
            prefs,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.prefs
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    // ─────────────────────────────────────────────────────────
    // Subscriptions
    // ─────────────────────────────────────────────────────────

    /// Register a callback run after every change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(PreferenceChange, &UserPreferences) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, change: PreferenceChange) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(change, &self.prefs);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Device selection
    // ─────────────────────────────────────────────────────────

    /// Select a device, or clear the selection with `None`
    ///
    /// An id not in the catalog clears the selection.
    pub fn set_selected_device(&mut self, id: Option<&str>) {
        let selected = match id {
            Some(id) if device::is_known(id) => Some(id.to_string()),
            Some(id) => {
                warn!("Ignoring unknown device id {:?}", id);
                None
            }
            None => None,
        };

        match &selected {
            Some(id) => self.persist(&self.keys.device_id, StoredValue::from(id.as_str())),
            None => self.persist_removal(&self.keys.device_id),
        }
        self.prefs.selected_device = selected;
        self.notify(PreferenceChange::SelectedDevice);
    }

    pub fn set_enabled_devices<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let devices = known_only(ids, device::is_known, "device");
        self.persist(&self.keys.enable_devices, StoredValue::string_array(&devices));
        self.prefs.enabled_devices = devices;
        self.notify(PreferenceChange::EnabledDevices);
    }

    /// Picker model seeded with the enabled devices
    pub fn device_selection(&self) -> DeviceSelection {
        DeviceSelection::new(&self.prefs.enabled_devices)
    }

    /// Apply a confirmed picker selection
    ///
    /// Returns false, changing nothing, when the selection is empty.
    pub fn confirm_device_selection(&mut self, selection: DeviceSelection) -> bool {
        match selection.confirm() {
            Some(devices) => {
                self.set_enabled_devices(devices);
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Enabled sets
    // ─────────────────────────────────────────────────────────

    /// Locale identifiers are free-form; only blank ones are dropped
    pub fn set_enabled_locales<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales = known_only(ids, locale::is_valid_locale, "locale");
        self.persist(&self.keys.enable_locales, StoredValue::string_array(&locales));
        self.prefs.enabled_locales = locales;
        self.notify(PreferenceChange::EnabledLocales);
    }

    pub fn set_enabled_calendars<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let calendars = known_only(ids, locale::is_known_calendar, "calendar");
        self.persist(
            &self.keys.enable_calendars,
            StoredValue::string_array(&calendars),
        );
        self.prefs.enabled_calendars = calendars;
        self.notify(PreferenceChange::EnabledCalendars);
    }

    pub fn set_enabled_time_zones<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let zones = known_only(ids, locale::is_known_time_zone, "time zone");
        self.persist(&self.keys.enable_time_zones, StoredValue::string_array(&zones));
        self.prefs.enabled_time_zones = zones;
        self.notify(PreferenceChange::EnabledTimeZones);
    }

    // ─────────────────────────────────────────────────────────
    // Toggles
    // ─────────────────────────────────────────────────────────

    pub fn set_simulator_enabled(&mut self, value: bool) {
        self.persist(&self.keys.simulator_enabled, StoredValue::Bool(value));
        self.prefs.simulator_enabled = value;
        self.notify(PreferenceChange::SimulatorEnabled);
    }

    pub fn set_dual_mode(&mut self, value: bool) {
        self.persist(&self.keys.dual_mode, StoredValue::Bool(value));
        self.prefs.dual_mode = value;
        self.notify(PreferenceChange::DualMode);
    }

    pub fn set_dark_mode(&mut self, value: bool) {
        self.persist(&self.keys.dark_mode, StoredValue::Bool(value));
        self.prefs.dark_mode = value;
        self.notify(PreferenceChange::DarkMode);
    }

    pub fn set_display_information(&mut self, value: bool) {
        self.persist(&self.keys.display_information, StoredValue::Bool(value));
        self.prefs.display_information = value;
        self.notify(PreferenceChange::DisplayInformation);
    }

    pub fn set_display_safe_area(&mut self, value: bool) {
        self.persist(&self.keys.display_safe_area, StoredValue::Bool(value));
        self.prefs.display_safe_area = value;
        self.notify(PreferenceChange::DisplaySafeArea);
    }

    pub fn set_dynamic_type_sizes_enabled(&mut self, value: bool) {
        self.persist(
            &self.keys.dynamic_type_sizes_enabled,
            StoredValue::Bool(value),
        );
        self.prefs.dynamic_type_sizes_enabled = value;
        self.notify(PreferenceChange::DynamicTypeSizesEnabled);
    }

    pub fn toggle_simulator_enabled(&mut self) {
        self.set_simulator_enabled(!self.prefs.simulator_enabled);
    }

    pub fn toggle_dual_mode(&mut self) {
        self.set_dual_mode(!self.prefs.dual_mode);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.set_dark_mode(!self.prefs.dark_mode);
    }

    pub fn toggle_display_information(&mut self) {
        self.set_display_information(!self.prefs.display_information);
    }

    pub fn toggle_display_safe_area(&mut self) {
        self.set_display_safe_area(!self.prefs.display_safe_area);
    }

    pub fn toggle_dynamic_type_sizes_enabled(&mut self) {
        self.set_dynamic_type_sizes_enabled(!self.prefs.dynamic_type_sizes_enabled);
    }

    // ─────────────────────────────────────────────────────────
    // Active environment
    // ─────────────────────────────────────────────────────────

    /// Blank identifiers are ignored
    pub fn set_active_locale(&mut self, id: &str) {
        if !locale::is_valid_locale(id) {
            warn!("Ignoring blank locale identifier");
            return;
        }
        self.persist(&self.keys.locale, StoredValue::from(id));
        self.prefs.active_locale = id.to_string();
        self.notify(PreferenceChange::ActiveLocale);
    }

    /// Unknown calendar identifiers are ignored
    pub fn set_active_calendar(&mut self, id: &str) {
        if !locale::is_known_calendar(id) {
            warn!("Ignoring unknown calendar {:?}", id);
            return;
        }
        self.persist(&self.keys.calendar, StoredValue::from(id));
        self.prefs.active_calendar = id.to_string();
        self.notify(PreferenceChange::ActiveCalendar);
    }

    /// `None` (or an unknown id) follows the host time zone again
    pub fn set_active_time_zone(&mut self, id: Option<&str>) {
        let zone = match id {
            Some(id) if locale::is_known_time_zone(id) => Some(id.to_string()),
            Some(id) => {
                warn!("Ignoring unknown time zone {:?}", id);
                None
            }
            None => None,
        };

        match &zone {
            Some(id) => self.persist(&self.keys.time_zone, StoredValue::from(id.as_str())),
            None => self.persist_removal(&self.keys.time_zone),
        }
        self.prefs.active_time_zone = zone;
        self.notify(PreferenceChange::ActiveTimeZone);
    }

    pub fn set_active_text_scale(&mut self, scale: TextScale) {
        self.persist(&self.keys.dynamic_type_size, StoredValue::from(scale.id()));
        self.prefs.active_text_scale = scale;
        self.notify(PreferenceChange::ActiveTextScale);
    }

    // ─────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────

    fn persist(&self, key: &str, value: StoredValue) {
        if let Err(e) = self.store.set(key, value) {
            report_write_failure("persist", key, &e);
        }
    }

    fn persist_removal(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            report_write_failure("remove", key, &e);
        }
    }
}

/// The in-memory value is kept either way; only the log level differs
fn report_write_failure(action: &str, key: &str, e: &Error) {
    if e.is_recoverable() {
        warn!("Failed to {} {}: {}", action, key, e);
    } else {
        error!("Failed to {} {}, store is unusable: {}", action, key, e);
    }
}

/// Collect ids into a set, dropping those `accept` rejects
fn known_only<I, S>(ids: I, accept: fn(&str) -> bool, what: &str) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter()
        .map(Into::into)
        .filter(|id| {
            let ok = accept(id);
            if !ok {
                debug!("Dropping unknown {} {:?}", what, id);
            }
            ok
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────

fn decode(
    store: &dyn KeyValueStore,
    keys: &StorageKeys,
    overrides: PresetOverrides,
) -> UserPreferences {
    let defaults = UserPreferences::default();

    let stored_set = |key: &str, accept: fn(&str) -> bool, what: &str| {
        store
            .string_array(key)
            .map(|ids| known_only(ids, accept, what))
    };
    let pick_set = |over: Option<BTreeSet<String>>,
                    key: &str,
                    accept: fn(&str) -> bool,
                    what: &str,
                    preset: BTreeSet<String>| {
        over.map(|ids| known_only(ids, accept, what))
            .or_else(|| stored_set(key, accept, what))
            .unwrap_or(preset)
    };
    let flag = |key: &str, default: bool| store.bool(key).unwrap_or(default);

    UserPreferences {
        selected_device: store.string(&keys.device_id).filter(|id| device::is_known(id)),
        enabled_devices: pick_set(
            overrides.devices,
            &keys.enable_devices,
            device::is_known,
            "device",
            defaults.enabled_devices,
        ),
        enabled_locales: pick_set(
            overrides.locales,
            &keys.enable_locales,
            locale::is_valid_locale,
            "locale",
            defaults.enabled_locales,
        ),
        enabled_calendars: pick_set(
            overrides.calendars,
            &keys.enable_calendars,
            locale::is_known_calendar,
            "calendar",
            defaults.enabled_calendars,
        ),
        enabled_time_zones: pick_set(
            overrides.time_zones,
            &keys.enable_time_zones,
            locale::is_known_time_zone,
            "time zone",
            defaults.enabled_time_zones,
        ),
        simulator_enabled: flag(&keys.simulator_enabled, defaults.simulator_enabled),
        dual_mode: flag(&keys.dual_mode, defaults.dual_mode),
        dark_mode: flag(&keys.dark_mode, defaults.dark_mode),
        display_information: flag(&keys.display_information, defaults.display_information),
        display_safe_area: flag(&keys.display_safe_area, defaults.display_safe_area),
        dynamic_type_sizes_enabled: flag(
            &keys.dynamic_type_sizes_enabled,
            defaults.dynamic_type_sizes_enabled,
        ),
        active_locale: store
            .string(&keys.locale)
            .filter(|id| locale::is_valid_locale(id))
            .unwrap_or(defaults.active_locale),
        active_calendar: store
            .string(&keys.calendar)
            .filter(|id| locale::is_known_calendar(id))
            .unwrap_or(defaults.active_calendar),
        active_time_zone: store
            .string(&keys.time_zone)
            .filter(|id| locale::is_known_time_zone(id)),
        active_text_scale: store
            .string(&keys.dynamic_type_size)
            .and_then(|id| TextScale::from_id(&id))
            .unwrap_or(defaults.active_text_scale),
    }
}
