//! Dynamic type (text scaling) levels

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Text scaling level applied to the embedded view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextScale {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
    Accessibility1,
    Accessibility2,
    Accessibility3,
    Accessibility4,
    Accessibility5,
}

impl TextScale {
    pub const ALL: [TextScale; 12] = [
        TextScale::XSmall,
        TextScale::Small,
        TextScale::Medium,
        TextScale::Large,
        TextScale::XLarge,
        TextScale::XxLarge,
        TextScale::XxxLarge,
        TextScale::Accessibility1,
        TextScale::Accessibility2,
        TextScale::Accessibility3,
        TextScale::Accessibility4,
        TextScale::Accessibility5,
    ];

    /// Persisted identifier
    pub fn id(&self) -> &'static str {
        match self {
            TextScale::XSmall => "xSmall",
            TextScale::Small => "small",
            TextScale::Medium => "medium",
            TextScale::Large => "large",
            TextScale::XLarge => "xLarge",
            TextScale::XxLarge => "xxLarge",
            TextScale::XxxLarge => "xxxLarge",
            TextScale::Accessibility1 => "accessibility1",
            TextScale::Accessibility2 => "accessibility2",
            TextScale::Accessibility3 => "accessibility3",
            TextScale::Accessibility4 => "accessibility4",
            TextScale::Accessibility5 => "accessibility5",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.id() == id)
    }

    /// Footer label
    pub fn label(&self) -> &'static str {
        match self {
            TextScale::XSmall => "Extra Small",
            TextScale::Small => "Small",
            TextScale::Medium => "Medium",
            TextScale::Large => "Large",
            TextScale::XLarge => "Extra Large",
            TextScale::XxLarge => "Extra Extra Large",
            TextScale::XxxLarge => "Extra Extra Extra Large",
            TextScale::Accessibility1 => "Accessibility 1",
            TextScale::Accessibility2 => "Accessibility 2",
            TextScale::Accessibility3 => "Accessibility 3",
            TextScale::Accessibility4 => "Accessibility 4",
            TextScale::Accessibility5 => "Accessibility 5",
        }
    }

    pub fn is_accessibility(&self) -> bool {
        *self >= TextScale::Accessibility1
    }

    /// Position on the text-size slider
    pub fn slider_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|scale| scale == self)
            .unwrap_or_default()
    }

    /// Slider position back to a level; out-of-range values clamp to the ends
    pub fn from_slider_value(value: f64) -> Self {
        let max = (Self::ALL.len() - 1) as f64;
        let index = value.round().clamp(0.0, max) as usize;
        Self::ALL[index]
    }

    pub fn slider_range() -> RangeInclusive<usize> {
        0..=Self::ALL.len() - 1
    }
}

impl fmt::Display for TextScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_lookup() {
        for scale in TextScale::ALL {
            assert_eq!(TextScale::from_id(scale.id()), Some(scale));
        }
        assert_eq!(TextScale::from_id("huge"), None);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&TextScale::XxLarge).unwrap();
        assert_eq!(json, "\"xxLarge\"");
        let json = serde_json::to_string(&TextScale::Accessibility3).unwrap();
        assert_eq!(json, format!("\"{}\"", TextScale::Accessibility3.id()));
    }

    #[test]
    fn test_slider_mapping() {
        assert_eq!(TextScale::Medium.slider_index(), 2);
        assert_eq!(TextScale::from_slider_value(2.4), TextScale::Medium);
        assert_eq!(TextScale::from_slider_value(-3.0), TextScale::XSmall);
        assert_eq!(TextScale::from_slider_value(99.0), TextScale::Accessibility5);
        assert_eq!(TextScale::slider_range(), 0..=11);
    }

    #[test]
    fn test_accessibility_levels() {
        assert!(!TextScale::XxxLarge.is_accessibility());
        assert!(TextScale::Accessibility1.is_accessibility());
        assert_eq!(TextScale::default(), TextScale::Medium);
    }
}
