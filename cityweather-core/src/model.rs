use std::fmt;

use thiserror::Error;

/// A resolved place, taken from the first geocoding match.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// First-level administrative area, e.g. a state or province.
    pub region: Option<String>,
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub country_code: Option<String>,
}

impl Location {
    pub fn new(display_name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            display_name: display_name.into(),
            latitude,
            longitude,
            region: None,
            country: None,
            country_code: None,
        }
    }
}

/// Current conditions in the units that were requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub wind_speed: f64,
    pub condition_code: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Metric, UnitSystem::Imperial]
    }

    /// Value of the forecast API's `temperature_unit` parameter.
    pub fn temperature_token(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "celsius",
            UnitSystem::Imperial => "fahrenheit",
        }
    }

    /// Value of the forecast API's `windspeed_unit` parameter.
    pub fn wind_speed_token(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kmh",
            UnitSystem::Imperial => "mph",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn wind_speed_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown unit system '{0}'; supported: metric, imperial")]
pub struct UnknownUnitSystem(pub String);

impl TryFrom<&str> for UnitSystem {
    type Error = UnknownUnitSystem;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(UnknownUnitSystem(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_system_as_str_roundtrip() {
        for units in UnitSystem::all() {
            let parsed = UnitSystem::try_from(units.as_str()).expect("roundtrip should succeed");
            assert_eq!(*units, parsed);
        }
    }

    #[test]
    fn unknown_unit_system_error() {
        let err = UnitSystem::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("unknown unit system 'kelvin'"));
    }

    #[test]
    fn default_is_metric() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }

    #[test]
    fn request_tokens_and_labels_agree() {
        assert_eq!(UnitSystem::Metric.temperature_token(), "celsius");
        assert_eq!(UnitSystem::Metric.wind_speed_token(), "kmh");
        assert_eq!(UnitSystem::Metric.wind_speed_suffix(), "km/h");

        assert_eq!(UnitSystem::Imperial.temperature_token(), "fahrenheit");
        assert_eq!(UnitSystem::Imperial.wind_speed_token(), "mph");
        assert_eq!(UnitSystem::Imperial.temperature_suffix(), "°F");
    }
}
