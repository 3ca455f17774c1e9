//! # devsim-core - Core Domain Types
//!
//! Foundation crate for devsim. Provides the device catalog, the layout
//! resolver, locale/calendar/time-zone registries, text scaling levels and
//! the shared error and logging setup.
//!
//! This crate has **zero internal dependencies** and no IO apart from the
//! log file set up by [`logging::init`].
//!
//! ## Public API
//!
//! ### Device Catalog (`device`)
//! - [`DeviceProfile`] - Portrait size, safe-area insets and size classes
//! - [`device::lookup()`], [`device::all()`], [`device::phones()`], [`device::tablets()`]
//!
//! ### Layout Resolver (`layout`)
//! - [`orientation()`], [`content_dimensions()`], [`fitting_devices()`], [`size_class()`]
//! - [`ContentDimensions`] - Content size vs. frame size of a simulated screen
//!
//! ### Registries (`locale`, `text_scale`)
//! - [`CalendarEntry`], [`TimeZoneEntry`], [`TextScale`]
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]

pub mod device;
pub mod error;
pub mod layout;
pub mod locale;
pub mod logging;
pub mod prelude;
pub mod selection;
pub mod text_scale;

pub use device::{DeviceFamily, DeviceProfile, SizeClass, SizeClassPair};
pub use error::{Error, Result, ResultExt};
pub use layout::{
    content_dimensions, fits, fitting_devices, orientation, picker_order, safe_area_bars,
    size_class, ContentDimensions, Orientation, SafeAreaBars, Size,
};
pub use locale::{CalendarEntry, TimeZoneEntry};
pub use selection::{DeviceGroup, DeviceSelection};
pub use text_scale::TextScale;
