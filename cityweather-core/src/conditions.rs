//! WMO weather interpretation codes, as reported by Open-Meteo.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionEntry {
    pub description: &'static str,
    pub icon: &'static str,
}

impl ConditionEntry {
    const fn new(description: &'static str, icon: &'static str) -> Self {
        Self { description, icon }
    }
}

/// Returned for any code missing from [`WMO_CODES`].
pub const UNKNOWN: ConditionEntry = ConditionEntry::new("Unknown", "❔");

/// Sorted by code.
pub const WMO_CODES: &[(i32, ConditionEntry)] = &[
    (0, ConditionEntry::new("Clear sky", "☀️")),
    (1, ConditionEntry::new("Mainly clear", "🌤️")),
    (2, ConditionEntry::new("Partly cloudy", "⛅")),
    (3, ConditionEntry::new("Overcast", "☁️")),
    (45, ConditionEntry::new("Fog", "🌫️")),
    (48, ConditionEntry::new("Depositing rime fog", "🌫️")),
    (51, ConditionEntry::new("Light drizzle", "🌦️")),
    (53, ConditionEntry::new("Moderate drizzle", "🌦️")),
    (55, ConditionEntry::new("Dense drizzle", "🌧️")),
    (56, ConditionEntry::new("Light freezing drizzle", "🌧️")),
    (57, ConditionEntry::new("Dense freezing drizzle", "🌧️")),
    (61, ConditionEntry::new("Slight rain", "🌦️")),
    (63, ConditionEntry::new("Moderate rain", "🌧️")),
    (65, ConditionEntry::new("Heavy rain", "🌧️")),
    (66, ConditionEntry::new("Light freezing rain", "🌧️")),
    (67, ConditionEntry::new("Heavy freezing rain", "🌧️")),
    (71, ConditionEntry::new("Slight snowfall", "🌨️")),
    (73, ConditionEntry::new("Moderate snowfall", "🌨️")),
    (75, ConditionEntry::new("Heavy snowfall", "❄️")),
    (77, ConditionEntry::new("Snow grains", "🌨️")),
    (80, ConditionEntry::new("Rain showers (slight)", "🌦️")),
    (81, ConditionEntry::new("Rain showers (moderate)", "🌧️")),
    (82, ConditionEntry::new("Rain showers (violent)", "🌧️")),
    (85, ConditionEntry::new("Snow showers (slight)", "🌨️")),
    (86, ConditionEntry::new("Snow showers (heavy)", "🌨️")),
    (95, ConditionEntry::new("Thunderstorm (slight/moderate)", "⛈️")),
    (96, ConditionEntry::new("Thunderstorm with slight hail", "⛈️")),
    (99, ConditionEntry::new("Thunderstorm with heavy hail", "⛈️")),
];

/// Never fails: unmapped codes yield [`UNKNOWN`].
pub fn lookup(code: i32) -> ConditionEntry {
    WMO_CODES
        .binary_search_by_key(&code, |(c, _)| *c)
        .map(|idx| WMO_CODES[idx].1)
        .unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_without_duplicates() {
        assert!(WMO_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn every_known_code_resolves_to_its_entry() {
        for (code, entry) in WMO_CODES {
            assert_eq!(lookup(*code), *entry);
            assert_ne!(lookup(*code), UNKNOWN);
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(lookup(0).description, "Clear sky");
        assert_eq!(lookup(3).icon, "☁️");
        assert_eq!(lookup(63).description, "Moderate rain");
        assert_eq!(lookup(99).description, "Thunderstorm with heavy hail");
    }

    #[test]
    fn unknown_codes_fall_back_to_default() {
        for code in [-1, 4, 44, 100, 1000, i32::MIN, i32::MAX] {
            assert_eq!(lookup(code), UNKNOWN, "code {code}");
        }
        assert_eq!(UNKNOWN.description, "Unknown");
    }
}
