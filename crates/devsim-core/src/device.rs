//! # Device Catalog
//!
//! Static registry of simulated device profiles. Each profile is a plain data
//! record keyed by a stable string id; the persisted preferences only ever
//! store that id, so adding a device is a data change here and nothing else.
//!
//! Sizes are logical points in portrait orientation. The declaration order of
//! [`DEVICES`] is the profiles' natural ordering (oldest/smallest first) and
//! is what pickers sort by.

use serde::Serialize;

// ============================================================================
// Size classes
// ============================================================================

/// Coarse layout category along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Compact,
    Regular,
}

/// Horizontal and vertical size class for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SizeClassPair {
    pub horizontal: SizeClass,
    pub vertical: SizeClass,
}

impl SizeClassPair {
    pub const fn new(horizontal: SizeClass, vertical: SizeClass) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

const PHONE_PORTRAIT: SizeClassPair = SizeClassPair::new(SizeClass::Compact, SizeClass::Regular);
const PHONE_LANDSCAPE: SizeClassPair = SizeClassPair::new(SizeClass::Compact, SizeClass::Compact);
const LARGE_PHONE_LANDSCAPE: SizeClassPair =
    SizeClassPair::new(SizeClass::Regular, SizeClass::Compact);
const TABLET: SizeClassPair = SizeClassPair::new(SizeClass::Regular, SizeClass::Regular);

// ============================================================================
// DeviceProfile
// ============================================================================

/// Product family, used to group devices in selection UIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceFamily {
    MediaPlayer,
    Phone,
    Tablet,
}

impl DeviceFamily {
    /// Media players share the phone section of the picker
    pub fn is_phone_like(&self) -> bool {
        matches!(self, DeviceFamily::MediaPlayer | DeviceFamily::Phone)
    }
}

/// Screen geometry and layout metadata of one simulated device
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceProfile {
    /// Stable identifier, persisted in preferences
    pub id: &'static str,
    pub name: &'static str,
    /// Screen diagonal in inches, as marketed
    pub inch: &'static str,
    pub family: DeviceFamily,
    /// Logical width in portrait
    pub width: f64,
    /// Logical height in portrait
    pub height: f64,
    pub safe_area_top: f64,
    pub safe_area_bottom: f64,
    pub portrait_size_class: SizeClassPair,
    pub landscape_size_class: SizeClassPair,
}

impl DeviceProfile {
    /// Combined top and bottom inset
    pub fn safe_area_height(&self) -> f64 {
        self.safe_area_top + self.safe_area_bottom
    }

    /// Picker row title, e.g. "iPhone 11 (6.1 inch)"
    pub fn summary(&self) -> String {
        format!("{} ({} inch)", self.name, self.inch)
    }

    /// Portrait point size label, e.g. "414 x 896"
    pub fn dimensions_label(&self) -> String {
        format!("{} x {}", self.width as i64, self.height as i64)
    }

    /// Checks the geometry invariants every catalog entry must hold
    pub fn is_well_formed(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.safe_area_top >= 0.0
            && self.safe_area_bottom >= 0.0
            && self.safe_area_height() < self.height
    }
}

#[allow(clippy::too_many_arguments)]
const fn profile(
    id: &'static str,
    name: &'static str,
    inch: &'static str,
    family: DeviceFamily,
    (width, height): (f64, f64),
    (safe_area_top, safe_area_bottom): (f64, f64),
    portrait_size_class: SizeClassPair,
    landscape_size_class: SizeClassPair,
) -> DeviceProfile {
    DeviceProfile {
        id,
        name,
        inch,
        family,
        width,
        height,
        safe_area_top,
        safe_area_bottom,
        portrait_size_class,
        landscape_size_class,
    }
}

use DeviceFamily::{MediaPlayer, Phone, Tablet};

/// Every known device, in natural order
#[rustfmt::skip]
pub static DEVICES: &[DeviceProfile] = &[
    // ─────────────────────────────────────────────────────────
    // iPod / iPhone
    // ─────────────────────────────────────────────────────────
    profile("ipod-touch-7th", "iPod touch (7th generation)", "4", MediaPlayer, (320.0, 568.0), (20.0, 0.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-se-1st", "iPhone SE (1st generation)", "4", Phone, (320.0, 568.0), (20.0, 0.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-8", "iPhone 8", "4.7", Phone, (375.0, 667.0), (20.0, 0.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-8-plus", "iPhone 8 Plus", "5.5", Phone, (414.0, 736.0), (20.0, 0.0), PHONE_PORTRAIT, LARGE_PHONE_LANDSCAPE),
    profile("iphone-se-2nd", "iPhone SE (2nd generation)", "4.7", Phone, (375.0, 667.0), (20.0, 0.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-11-pro", "iPhone 11 Pro", "5.8", Phone, (375.0, 812.0), (44.0, 34.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-11", "iPhone 11", "6.1", Phone, (414.0, 896.0), (48.0, 34.0), PHONE_PORTRAIT, LARGE_PHONE_LANDSCAPE),
    profile("iphone-11-pro-max", "iPhone 11 Pro Max", "6.5", Phone, (414.0, 896.0), (44.0, 34.0), PHONE_PORTRAIT, LARGE_PHONE_LANDSCAPE),
    profile("iphone-12-mini", "iPhone 12 mini", "5.4", Phone, (375.0, 812.0), (50.0, 34.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-12", "iPhone 12", "6.1", Phone, (390.0, 844.0), (47.0, 34.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-12-pro-max", "iPhone 12 Pro Max", "6.7", Phone, (428.0, 926.0), (47.0, 34.0), PHONE_PORTRAIT, LARGE_PHONE_LANDSCAPE),
    profile("iphone-13-mini", "iPhone 13 mini", "5.4", Phone, (375.0, 812.0), (50.0, 34.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-13", "iPhone 13", "6.1", Phone, (390.0, 844.0), (47.0, 34.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-13-pro", "iPhone 13 Pro", "6.1", Phone, (390.0, 844.0), (47.0, 34.0), PHONE_PORTRAIT, PHONE_LANDSCAPE),
    profile("iphone-13-pro-max", "iPhone 13 Pro Max", "6.7", Phone, (428.0, 926.0), (47.0, 34.0), PHONE_PORTRAIT, LARGE_PHONE_LANDSCAPE),
    // ─────────────────────────────────────────────────────────
    // iPad
    // ─────────────────────────────────────────────────────────
    profile("ipad-mini-5th", "iPad mini (5th generation)", "7.9", Tablet, (768.0, 1024.0), (20.0, 0.0), TABLET, TABLET),
    profile("ipad-mini-6th", "iPad mini (6th generation)", "8.3", Tablet, (744.0, 1133.0), (24.0, 20.0), TABLET, TABLET),
    profile("ipad-9th", "iPad (9th generation)", "10.2", Tablet, (810.0, 1080.0), (20.0, 0.0), TABLET, TABLET),
    profile("ipad-air-4th", "iPad Air (4th generation)", "10.9", Tablet, (820.0, 1180.0), (24.0, 20.0), TABLET, TABLET),
    profile("ipad-pro-11", "iPad Pro (11-inch)", "11", Tablet, (834.0, 1194.0), (24.0, 20.0), TABLET, TABLET),
    profile("ipad-pro-12-9", "iPad Pro (12.9-inch)", "12.9", Tablet, (1024.0, 1366.0), (24.0, 20.0), TABLET, TABLET),
];

/// Devices enabled when nothing has been stored yet
pub const PRESET_DEVICE_IDS: &[&str] = &[
    "ipod-touch-7th",
    "iphone-se-2nd",
    "iphone-11",
    "iphone-13-pro-max",
    "ipad-mini-5th",
];

/// Device used for geometry when no device is selected
pub const DEFAULT_DEVICE_ID: &str = "iphone-se-2nd";

// ============================================================================
// Catalog lookups
// ============================================================================

/// Look up a profile by id. Unknown ids yield `None`.
pub fn lookup(id: &str) -> Option<&'static DeviceProfile> {
    DEVICES.iter().find(|d| d.id == id)
}

/// Whether `id` names a catalog entry
pub fn is_known(id: &str) -> bool {
    lookup(id).is_some()
}

/// All profiles in natural order
pub fn all() -> &'static [DeviceProfile] {
    DEVICES
}

/// Position of `id` in the natural order
pub fn rank(id: &str) -> Option<usize> {
    DEVICES.iter().position(|d| d.id == id)
}

/// Phones (and media players), in natural order
pub fn phones() -> Vec<&'static DeviceProfile> {
    DEVICES.iter().filter(|d| d.family.is_phone_like()).collect()
}

/// Tablets, in natural order
pub fn tablets() -> Vec<&'static DeviceProfile> {
    DEVICES
        .iter()
        .filter(|d| d.family == DeviceFamily::Tablet)
        .collect()
}

/// The curated preset profiles
pub fn presets() -> Vec<&'static DeviceProfile> {
    PRESET_DEVICE_IDS.iter().filter_map(|id| lookup(id)).collect()
}

/// Profile used when no device is selected
pub fn default_device() -> &'static DeviceProfile {
    lookup(DEFAULT_DEVICE_ID).unwrap_or(&DEVICES[0])
}
