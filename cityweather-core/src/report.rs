use crate::{
    conditions,
    model::{Location, UnitSystem, WeatherReading},
};

/// Render the multi-line summary printed on success.
pub fn render(location: &Location, reading: &WeatherReading, units: UnitSystem) -> String {
    let condition = conditions::lookup(reading.condition_code);

    let mut lines = vec![format!(
        "{} — {} {}",
        location.display_name, condition.icon, condition.description
    )];

    if let Some(region) = region_line(location) {
        lines.push(format!("{:<13}{region}", "Region:"));
    }

    lines.push(format!(
        "{:<13}{:.1}{}",
        "Temperature:",
        reading.temperature,
        units.temperature_suffix()
    ));
    lines.push(format!(
        "{:<13}{:.1} {}",
        "Wind:",
        reading.wind_speed,
        units.wind_speed_suffix()
    ));
    lines.push(format!(
        "{:<13}{:.3}, {:.3}",
        "Coordinates:", location.latitude, location.longitude
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn region_line(location: &Location) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(region) = location.region.as_deref() {
        parts.push(region);
    }
    if let Some(country) = location.country.as_deref() {
        parts.push(country);
    }

    let flag = location.country_code.as_deref().and_then(flag_emoji);

    match (parts.is_empty(), flag) {
        (true, None) => None,
        (true, Some(flag)) => Some(flag),
        (false, None) => Some(parts.join(", ")),
        (false, Some(flag)) => Some(format!("{} {flag}", parts.join(", "))),
    }
}

/// Regional-indicator flag for a two-letter ISO country code.
pub fn flag_emoji(country_code: &str) -> Option<String> {
    if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    country_code
        .chars()
        .map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}
