//! Overlay projection
//!
//! Turns the current [`UserPreferences`] and the live viewport into a
//! description of everything the host should draw: the simulated screens,
//! their rendering environment, and the toolbar. Recomputed from scratch on
//! every change; nothing here is stored.

use devsim_core::{
    content_dimensions, fitting_devices, orientation, picker_order, safe_area_bars, size_class,
    DeviceProfile, Orientation, SafeAreaBars, Size, SizeClass, TextScale,
};
use serde::Serialize;

use crate::config::LayoutSettings;
use crate::preferences::UserPreferences;

/// Appearance forced onto the embedded view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }
}

/// Environment values injected into the embedded view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEnvironment {
    pub locale: String,
    pub calendar: String,
    /// `None` keeps the host's time zone
    pub time_zone: Option<String>,
    pub color_scheme: ColorScheme,
    pub horizontal_size_class: SizeClass,
    pub vertical_size_class: SizeClass,
    /// Only set while dynamic type sizes are enabled
    pub text_scale: Option<TextScale>,
}

/// Text drawn above and below a simulated screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InformationText {
    /// e.g. "iPhone 11 - 6.1 inch (414 x 896)"
    pub title: String,
    pub locale: String,
    /// Text-scale label, while dynamic type sizes are enabled
    pub footer: Option<String>,
    /// Distance from the device frame
    pub offset: f64,
}

/// One rendered copy of the embedded view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedScreen {
    pub environment: RenderEnvironment,
    /// Size the embedded view is laid out at
    pub content: Size,
    /// Width the information text is aligned to
    pub frame_width: f64,
    pub safe_area: SafeAreaBars,
    pub information: Option<InformationText>,
}

/// How multiple screens are laid out
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenArrangement {
    Single,
    SideBySide { spacing: f64 },
    Stacked { spacing: f64 },
}

/// A toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub active: bool,
    pub enabled: bool,
}

/// The dynamic type slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextScaleSlider {
    pub index: usize,
    pub max: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toolbar {
    pub width: f64,
    pub height: f64,
    pub dual_mode: ButtonState,
    pub dark_mode: ButtonState,
    pub text_scale_slider: Option<TextScaleSlider>,
    /// Enabled locales, ascending
    pub locales: Vec<String>,
    pub calendars: Vec<String>,
    pub time_zones: Vec<String>,
}

/// The overlay while the simulator is on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedOverlay {
    pub orientation: Orientation,
    /// Device used for geometry
    pub device_id: &'static str,
    /// Enabled devices that fit the viewport, in picker order
    pub selectable_devices: Vec<&'static str>,
    pub arrangement: ScreenArrangement,
    /// Vertical shift applied to the screens
    pub content_offset: f64,
    pub screens: Vec<SimulatedScreen>,
    pub toolbar: Toolbar,
}

/// What the host draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OverlayFrame {
    /// Simulator off: host content fills the viewport, with only the power
    /// button on top
    Passthrough { viewport: Size },
    Simulated(SimulatedOverlay),
}

impl OverlayFrame {
    pub fn project(prefs: &UserPreferences, viewport: Size, layout: &LayoutSettings) -> Self {
        if !prefs.simulator_enabled {
            return OverlayFrame::Passthrough { viewport };
        }

        let orientation = orientation(viewport);
        let device = prefs.effective_device();

        let fitting = fitting_devices(prefs.enabled_profiles(), viewport, orientation);
        let selectable_devices = picker_order(fitting.iter().copied())
            .into_iter()
            .map(|p| p.id)
            .collect();

        let (arrangement, schemes) = if prefs.dual_mode {
            let arrangement = match orientation {
                Orientation::Portrait => ScreenArrangement::SideBySide {
                    spacing: layout.portrait_spacing,
                },
                Orientation::Landscape => ScreenArrangement::Stacked {
                    spacing: layout.landscape_spacing,
                },
            };
            (arrangement, vec![ColorScheme::Dark, ColorScheme::Light])
        } else {
            (
                ScreenArrangement::Single,
                vec![ColorScheme::from_dark(prefs.dark_mode)],
            )
        };

        let screens = schemes
            .into_iter()
            .map(|scheme| screen(prefs, device, orientation, scheme, layout))
            .collect();

        OverlayFrame::Simulated(SimulatedOverlay {
            orientation,
            device_id: device.id,
            selectable_devices,
            arrangement,
            content_offset: layout.content_offset,
            screens,
            toolbar: toolbar(prefs, viewport, layout),
        })
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, OverlayFrame::Simulated(_))
    }
}

fn screen(
    prefs: &UserPreferences,
    device: &DeviceProfile,
    orientation: Orientation,
    color_scheme: ColorScheme,
    layout: &LayoutSettings,
) -> SimulatedScreen {
    let dims = content_dimensions(device, orientation, prefs.display_safe_area);
    let size_classes = size_class(device, orientation);
    let text_scale = prefs
        .dynamic_type_sizes_enabled
        .then_some(prefs.active_text_scale);

    let information = prefs.display_information.then(|| InformationText {
        title: format!(
            "{} - {} inch ({})",
            device.name,
            device.inch,
            device.dimensions_label()
        ),
        locale: prefs.active_locale.clone(),
        footer: text_scale.map(|scale| scale.label().to_string()),
        offset: layout.information_offset,
    });

    SimulatedScreen {
        environment: RenderEnvironment {
            locale: prefs.active_locale.clone(),
            calendar: prefs.active_calendar.clone(),
            time_zone: prefs.active_time_zone.clone(),
            color_scheme,
            horizontal_size_class: size_classes.horizontal,
            vertical_size_class: size_classes.vertical,
            text_scale,
        },
        content: dims.content,
        frame_width: dims.frame.width,
        safe_area: safe_area_bars(device, orientation, prefs.display_safe_area),
        information,
    }
}

fn toolbar(prefs: &UserPreferences, viewport: Size, layout: &LayoutSettings) -> Toolbar {
    let max = *TextScale::slider_range().end();
    Toolbar {
        width: viewport.width,
        height: layout.toolbar_height,
        dual_mode: ButtonState {
            active: prefs.dual_mode,
            enabled: true,
        },
        dark_mode: ButtonState {
            active: prefs.dark_mode,
            enabled: !prefs.dual_mode,
        },
        text_scale_slider: prefs.dynamic_type_sizes_enabled.then(|| TextScaleSlider {
            index: prefs.active_text_scale.slider_index(),
            max,
        }),
        locales: prefs.enabled_locales.iter().cloned().collect(),
        calendars: prefs.enabled_calendars.iter().cloned().collect(),
        time_zones: prefs.enabled_time_zones.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulated(frame: OverlayFrame) -> SimulatedOverlay {
        match frame {
            OverlayFrame::Simulated(overlay) => overlay,
            OverlayFrame::Passthrough { .. } => panic!("expected simulated overlay"),
        }
    }

    fn prefs_with_device(id: &str) -> UserPreferences {
        UserPreferences {
            selected_device: Some(id.to_string()),
            ..Default::default()
        }
    }

    const TALL: Size = Size::new(1200.0, 1400.0);
    const WIDE: Size = Size::new(1400.0, 1200.0);

    #[test]
    fn test_disabled_is_passthrough() {
        let prefs = UserPreferences {
            simulator_enabled: false,
            ..Default::default()
        };
        let frame = OverlayFrame::project(&prefs, TALL, &LayoutSettings::default());
        assert_eq!(frame, OverlayFrame::Passthrough { viewport: TALL });
        assert!(!frame.is_simulated());
    }

    #[test]
    fn test_single_screen_geometry() {
        let prefs = prefs_with_device("iphone-11");
        let overlay = simulated(OverlayFrame::project(&prefs, TALL, &LayoutSettings::default()));

        assert_eq!(overlay.orientation, Orientation::Portrait);
        assert_eq!(overlay.arrangement, ScreenArrangement::Single);
        assert_eq!(overlay.screens.len(), 1);

        let screen = &overlay.screens[0];
        assert_eq!(screen.content, Size::new(414.0, 814.0));
        assert_eq!(screen.frame_width, 414.0);
        assert_eq!(screen.environment.color_scheme, ColorScheme::Light);
        assert_eq!(screen.environment.horizontal_size_class, SizeClass::Compact);
        assert_eq!(screen.environment.vertical_size_class, SizeClass::Regular);
        assert_eq!(screen.environment.text_scale, None);
    }

    #[test]
    fn test_dual_mode_arrangement() {
        let prefs = UserPreferences {
            dual_mode: true,
            dark_mode: false,
            ..prefs_with_device("iphone-11")
        };
        let layout = LayoutSettings::default();

        let portrait = simulated(OverlayFrame::project(&prefs, TALL, &layout));
        assert_eq!(
            portrait.arrangement,
            ScreenArrangement::SideBySide { spacing: 24.0 }
        );
        let schemes: Vec<_> = portrait
            .screens
            .iter()
            .map(|s| s.environment.color_scheme)
            .collect();
        assert_eq!(schemes, vec![ColorScheme::Dark, ColorScheme::Light]);
        assert!(!portrait.toolbar.dark_mode.enabled);

        let landscape = simulated(OverlayFrame::project(&prefs, WIDE, &layout));
        assert_eq!(
            landscape.arrangement,
            ScreenArrangement::Stacked { spacing: 64.0 }
        );
        assert_eq!(landscape.screens[0].content, Size::new(814.0, 414.0));
    }

    #[test]
    fn test_information_text() {
        let prefs = UserPreferences {
            dynamic_type_sizes_enabled: true,
            active_text_scale: TextScale::Large,
            active_locale: "ja_JP".into(),
            ..prefs_with_device("iphone-11")
        };
        let overlay = simulated(OverlayFrame::project(&prefs, TALL, &LayoutSettings::default()));
        let info = overlay.screens[0].information.clone().unwrap();

        assert_eq!(info.title, "iPhone 11 - 6.1 inch (414 x 896)");
        assert_eq!(info.locale, "ja_JP");
        assert_eq!(info.footer.as_deref(), Some(TextScale::Large.label()));
        assert_eq!(
            overlay.screens[0].environment.text_scale,
            Some(TextScale::Large)
        );
        assert!(overlay.toolbar.text_scale_slider.is_some());
    }

    #[test]
    fn test_information_hidden() {
        let prefs = UserPreferences {
            display_information: false,
            ..prefs_with_device("iphone-11")
        };
        let overlay = simulated(OverlayFrame::project(&prefs, TALL, &LayoutSettings::default()));
        assert!(overlay.screens[0].information.is_none());
        assert!(overlay.toolbar.text_scale_slider.is_none());
    }

    #[test]
    fn test_no_selection_uses_default_device() {
        let overlay = simulated(OverlayFrame::project(
            &UserPreferences::default(),
            TALL,
            &LayoutSettings::default(),
        ));
        assert_eq!(overlay.device_id, "iphone-se-2nd");
        assert_eq!(overlay.screens[0].content, Size::new(375.0, 647.0));
    }

    #[test]
    fn test_selectable_devices_fit_and_are_reversed() {
        let overlay = simulated(OverlayFrame::project(
            &UserPreferences::default(),
            Size::new(500.0, 1000.0),
            &LayoutSettings::default(),
        ));
        assert_eq!(
            overlay.selectable_devices,
            vec!["iphone-13-pro-max", "iphone-11", "iphone-se-2nd", "ipod-touch-7th"]
        );
    }

    #[test]
    fn test_toolbar_lists() {
        let overlay = simulated(OverlayFrame::project(
            &UserPreferences::default(),
            TALL,
            &LayoutSettings::default(),
        ));
        assert_eq!(overlay.toolbar.width, 1200.0);
        assert_eq!(overlay.toolbar.height, 64.0);
        assert_eq!(overlay.toolbar.locales, vec!["en_US", "ja_JP"]);
        assert!(overlay.toolbar.dark_mode.enabled);
    }
}
