//! Locale, calendar and time-zone registries
//!
//! Calendars and time zones are tagged records keyed by their raw identifier
//! string, which is also what gets persisted. Locales are free-form: any
//! identifier string is accepted and [`LOCALES`] only seeds the picker.

use serde::Serialize;

/// A calendar system the embedded view can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarEntry {
    pub id: &'static str,
    pub name: &'static str,
}

/// A time zone the embedded view can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeZoneEntry {
    /// IANA identifier
    pub id: &'static str,
    pub name: &'static str,
}

const fn calendar(id: &'static str, name: &'static str) -> CalendarEntry {
    CalendarEntry { id, name }
}

const fn time_zone(id: &'static str, name: &'static str) -> TimeZoneEntry {
    TimeZoneEntry { id, name }
}

pub static CALENDARS: &[CalendarEntry] = &[
    calendar("buddhist", "Buddhist"),
    calendar("chinese", "Chinese"),
    calendar("coptic", "Coptic"),
    calendar("ethiopicAmeteAlem", "Ethiopic (Amete Alem)"),
    calendar("ethiopicAmeteMihret", "Ethiopic (Amete Mihret)"),
    calendar("gregorian", "Gregorian"),
    calendar("hebrew", "Hebrew"),
    calendar("indian", "Indian"),
    calendar("islamic", "Islamic"),
    calendar("islamicCivil", "Islamic (Civil)"),
    calendar("islamicTabular", "Islamic (Tabular)"),
    calendar("islamicUmmAlQura", "Islamic (Umm al-Qura)"),
    calendar("iso8601", "ISO 8601"),
    calendar("japanese", "Japanese"),
    calendar("persian", "Persian"),
    calendar("republicOfChina", "Republic of China"),
];

pub static TIME_ZONES: &[TimeZoneEntry] = &[
    time_zone("Pacific/Honolulu", "Honolulu"),
    time_zone("America/Anchorage", "Anchorage"),
    time_zone("America/Los_Angeles", "Los Angeles"),
    time_zone("America/Denver", "Denver"),
    time_zone("America/Chicago", "Chicago"),
    time_zone("America/New_York", "New York"),
    time_zone("America/Sao_Paulo", "São Paulo"),
    time_zone("UTC", "UTC"),
    time_zone("Europe/London", "London"),
    time_zone("Europe/Paris", "Paris"),
    time_zone("Europe/Berlin", "Berlin"),
    time_zone("Africa/Cairo", "Cairo"),
    time_zone("Europe/Moscow", "Moscow"),
    time_zone("Asia/Dubai", "Dubai"),
    time_zone("Asia/Kolkata", "Kolkata"),
    time_zone("Asia/Bangkok", "Bangkok"),
    time_zone("Asia/Shanghai", "Shanghai"),
    time_zone("Asia/Seoul", "Seoul"),
    time_zone("Asia/Tokyo", "Tokyo"),
    time_zone("Australia/Sydney", "Sydney"),
    time_zone("Pacific/Auckland", "Auckland"),
];

/// Locale identifiers offered by the locale picker
pub static LOCALES: &[&str] = &[
    "ar_SA", "de_DE", "en_GB", "en_US", "es_ES", "fr_FR", "he_IL", "hi_IN", "it_IT", "ja_JP",
    "ko_KR", "nl_NL", "pt_BR", "ru_RU", "sv_SE", "th_TH", "zh_Hans_CN", "zh_Hant_TW",
];

pub const PRESET_LOCALES: &[&str] = &["en_US", "ja_JP"];
pub const PRESET_CALENDARS: &[&str] = &["iso8601", "japanese"];
pub const PRESET_TIME_ZONES: &[&str] = &["Asia/Tokyo", "America/New_York"];

pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_CALENDAR: &str = "iso8601";

pub fn lookup_calendar(id: &str) -> Option<&'static CalendarEntry> {
    CALENDARS.iter().find(|c| c.id == id)
}

pub fn lookup_time_zone(id: &str) -> Option<&'static TimeZoneEntry> {
    TIME_ZONES.iter().find(|tz| tz.id == id)
}

pub fn is_known_calendar(id: &str) -> bool {
    lookup_calendar(id).is_some()
}

pub fn is_known_time_zone(id: &str) -> bool {
    lookup_time_zone(id).is_some()
}

/// Locales need no registry entry, only a non-blank identifier
pub fn is_valid_locale(id: &str) -> bool {
    !id.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_registered() {
        assert!(PRESET_CALENDARS.iter().all(|id| is_known_calendar(id)));
        assert!(PRESET_TIME_ZONES.iter().all(|id| is_known_time_zone(id)));
        assert!(PRESET_LOCALES.iter().all(|id| LOCALES.contains(id)));
        assert!(is_known_calendar(DEFAULT_CALENDAR));
    }

    #[test]
    fn test_unknown_identifiers() {
        assert!(lookup_calendar("mayan").is_none());
        assert!(lookup_time_zone("Mars/Olympus_Mons").is_none());
    }

    #[test]
    fn test_locale_validation() {
        assert!(is_valid_locale("fr_CA"));
        assert!(!is_valid_locale("  "));
    }
}
