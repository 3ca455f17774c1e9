//! # Layout Resolver
//!
//! Pure geometry functions that turn a [`DeviceProfile`] plus the live
//! viewport size into concrete rendering parameters. Nothing here is stored.
//!
//! Two heights come out of [`content_dimensions`] and they are not
//! interchangeable:
//!
//! - `content` always excludes the safe areas. The embedded app is laid out
//!   at this size.
//! - `frame` excludes the safe areas only when they are hidden. Chrome
//!   (information header/footer) is positioned against this size, since the
//!   visible safe-area bands add to the device's on-screen extent.

use std::collections::HashSet;

use serde::Serialize;

use crate::device::{self, DeviceProfile, SizeClassPair};

// ============================================================================
// Size / Orientation
// ============================================================================

/// Width and height in logical points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same size with the axes exchanged
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Orientation of the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_portrait(&self) -> bool {
        matches!(self, Orientation::Portrait)
    }

    /// Maps a portrait size into this orientation
    pub fn apply(&self, portrait: Size) -> Size {
        match self {
            Orientation::Portrait => portrait,
            Orientation::Landscape => portrait.swapped(),
        }
    }
}

/// Orientation of a viewport. A square viewport counts as portrait.
pub fn orientation(viewport: Size) -> Orientation {
    if viewport.width <= viewport.height {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    }
}

// ============================================================================
// Content / frame dimensions
// ============================================================================

/// The two related sizes of a simulated screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentDimensions {
    /// Size the embedded app is laid out at (safe areas always excluded)
    pub content: Size,
    /// Size used to position chrome (safe areas excluded only when hidden)
    pub frame: Size,
}

/// Compute content and frame sizes for a device in an orientation
pub fn content_dimensions(
    profile: &DeviceProfile,
    orientation: Orientation,
    display_safe_area: bool,
) -> ContentDimensions {
    let safe_area_height = profile.safe_area_height();

    let content = Size::new(profile.width, profile.height - safe_area_height);

    let frame_height = if display_safe_area {
        profile.height
    } else {
        profile.height - safe_area_height
    };
    let frame = Size::new(profile.width, frame_height);

    ContentDimensions {
        content: orientation.apply(content),
        frame: orientation.apply(frame),
    }
}

/// Decorative safe-area bands drawn around the content
///
/// In portrait the bands sit above and below the content; in landscape the
/// device is rotated so the same insets become leading and trailing bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "axis", rename_all = "lowercase")]
pub enum SafeAreaBars {
    Hidden,
    Vertical { top: f64, bottom: f64 },
    Horizontal { leading: f64, trailing: f64 },
}

pub fn safe_area_bars(
    profile: &DeviceProfile,
    orientation: Orientation,
    display_safe_area: bool,
) -> SafeAreaBars {
    if !display_safe_area {
        return SafeAreaBars::Hidden;
    }
    match orientation {
        Orientation::Portrait => SafeAreaBars::Vertical {
            top: profile.safe_area_top,
            bottom: profile.safe_area_bottom,
        },
        Orientation::Landscape => SafeAreaBars::Horizontal {
            leading: profile.safe_area_top,
            trailing: profile.safe_area_bottom,
        },
    }
}

// ============================================================================
// Fitting / size classes
// ============================================================================

/// Whether a device fits strictly inside the viewport in this orientation
pub fn fits(profile: &DeviceProfile, viewport: Size, orientation: Orientation) -> bool {
    let size = orientation.apply(Size::new(profile.width, profile.height));
    size.width < viewport.width && size.height < viewport.height
}

/// Ids of the candidates that fit the viewport
///
/// The result is unordered; see [`picker_order`] for display.
pub fn fitting_devices<'a, I>(
    candidates: I,
    viewport: Size,
    orientation: Orientation,
) -> HashSet<&'static str>
where
    I: IntoIterator<Item = &'a DeviceProfile>,
{
    candidates
        .into_iter()
        .filter(|profile| fits(profile, viewport, orientation))
        .map(|profile| profile.id)
        .collect()
}

/// Size-class pair of a device in an orientation
pub fn size_class(profile: &DeviceProfile, orientation: Orientation) -> SizeClassPair {
    match orientation {
        Orientation::Portrait => profile.portrait_size_class,
        Orientation::Landscape => profile.landscape_size_class,
    }
}

/// Order device ids for the device picker: natural order, reversed
///
/// Unknown ids are skipped.
pub fn picker_order<'a, I>(ids: I) -> Vec<&'static DeviceProfile>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut profiles: Vec<_> = ids.into_iter().filter_map(device::lookup).collect();
    profiles.sort_by_key(|p| device::rank(p.id));
    profiles.dedup_by_key(|p| p.id);
    profiles.reverse();
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{lookup, SizeClass};

    fn iphone_11_pro() -> &'static DeviceProfile {
        lookup("iphone-11-pro").unwrap()
    }

    #[test]
    fn test_orientation() {
        assert_eq!(orientation(Size::new(400.0, 800.0)), Orientation::Portrait);
        assert_eq!(orientation(Size::new(800.0, 400.0)), Orientation::Landscape);
        assert_eq!(orientation(Size::new(500.0, 500.0)), Orientation::Portrait);
    }

    #[test]
    fn test_content_height_always_excludes_safe_area() {
        let device = iphone_11_pro();

        let hidden = content_dimensions(device, Orientation::Portrait, false);
        assert_eq!(hidden.content, Size::new(375.0, 734.0));
        assert_eq!(hidden.frame, Size::new(375.0, 734.0));

        let shown = content_dimensions(device, Orientation::Portrait, true);
        assert_eq!(shown.content, Size::new(375.0, 734.0));
        assert_eq!(shown.frame, Size::new(375.0, 812.0));
    }

    #[test]
    fn test_landscape_swaps_both_sizes() {
        let device = iphone_11_pro();
        let dims = content_dimensions(device, Orientation::Landscape, true);
        assert_eq!(dims.content, Size::new(734.0, 375.0));
        assert_eq!(dims.frame, Size::new(812.0, 375.0));
    }

    #[test]
    fn test_safe_area_bars() {
        let device = iphone_11_pro();
        assert_eq!(
            safe_area_bars(device, Orientation::Portrait, true),
            SafeAreaBars::Vertical {
                top: 44.0,
                bottom: 34.0
            }
        );
        assert_eq!(
            safe_area_bars(device, Orientation::Landscape, true),
            SafeAreaBars::Horizontal {
                leading: 44.0,
                trailing: 34.0
            }
        );
        assert_eq!(
            safe_area_bars(device, Orientation::Portrait, false),
            SafeAreaBars::Hidden
        );
    }

    #[test]
    fn test_fits_is_strict() {
        let device = iphone_11_pro();
        assert!(fits(device, Size::new(376.0, 813.0), Orientation::Portrait));
        assert!(!fits(device, Size::new(375.0, 900.0), Orientation::Portrait));
        assert!(!fits(device, Size::new(400.0, 812.0), Orientation::Portrait));
    }

    #[test]
    fn test_fits_uses_rotated_size_in_landscape() {
        let device = iphone_11_pro();
        // 812 x 375 once rotated
        assert!(fits(device, Size::new(900.0, 400.0), Orientation::Landscape));
        assert!(!fits(device, Size::new(812.0, 400.0), Orientation::Landscape));
    }

    #[test]
    fn test_fitting_devices_filters_oversized() {
        let viewport = Size::new(800.0, 1100.0);
        let fitting = fitting_devices(device::all(), viewport, Orientation::Portrait);

        assert!(fitting.contains("iphone-13-pro-max"));
        assert!(fitting.contains("ipad-mini-5th"));
        assert!(!fitting.contains("ipad-mini-6th"));
        assert!(!fitting.contains("ipad-pro-12-9"));
        for id in &fitting {
            let p = lookup(id).unwrap();
            assert!(p.width < viewport.width && p.height < viewport.height);
        }
    }

    #[test]
    fn test_size_class_by_orientation() {
        let device = lookup("iphone-11").unwrap();
        assert_eq!(
            size_class(device, Orientation::Portrait),
            SizeClassPair::new(SizeClass::Compact, SizeClass::Regular)
        );
        assert_eq!(
            size_class(device, Orientation::Landscape),
            SizeClassPair::new(SizeClass::Regular, SizeClass::Compact)
        );
    }

    #[test]
    fn test_picker_order_is_reverse_natural() {
        let ordered = picker_order(["iphone-se-2nd", "ipad-mini-5th", "bogus", "ipod-touch-7th"]);
        let ids: Vec<_> = ordered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["ipad-mini-5th", "iphone-se-2nd", "ipod-touch-7th"]);
    }
}
