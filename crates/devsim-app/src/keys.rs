//! Fully qualified store keys for each persisted preference

use devsim_store::KeyNamespace;

/// One key per persisted field, all under the same namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub device_id: String,
    pub enable_devices: String,
    pub enable_locales: String,
    pub enable_calendars: String,
    pub enable_time_zones: String,
    pub simulator_enabled: String,
    pub dual_mode: String,
    pub dark_mode: String,
    pub display_information: String,
    pub display_safe_area: String,
    pub dynamic_type_sizes_enabled: String,
    pub locale: String,
    pub calendar: String,
    pub time_zone: String,
    pub dynamic_type_size: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(&KeyNamespace::default())
    }
}

impl StorageKeys {
    pub fn new(namespace: &KeyNamespace) -> Self {
        Self {
            device_id: namespace.key("deviceID"),
            enable_devices: namespace.key("enableDevices"),
            enable_locales: namespace.key("enableLocales"),
            enable_calendars: namespace.key("enableCalendars"),
            enable_time_zones: namespace.key("enableTimeZones"),
            simulator_enabled: namespace.key("simulatorEnabled"),
            dual_mode: namespace.key("dualMode"),
            dark_mode: namespace.key("dark"),
            display_information: namespace.key("displayInformation"),
            display_safe_area: namespace.key("displaySafeArea"),
            dynamic_type_sizes_enabled: namespace.key("dynamicTypeSizesEnabled"),
            locale: namespace.key("locale"),
            calendar: namespace.key("calendar"),
            time_zone: namespace.key("timeZone"),
            dynamic_type_size: namespace.key("dynamicTypeSize"),
        }
    }
}
