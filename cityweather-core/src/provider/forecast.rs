use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::ClientConfig,
    error::{Result, Service, WeatherError},
    model::{UnitSystem, WeatherReading},
};

use super::{WeatherSource, send_for_body};

/// Open-Meteo forecast endpoint, asked for the `current_weather` block only.
#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    url: String,
    http: Client,
}

impl OpenMeteoForecast {
    pub fn new(config: &ClientConfig, http: Client) -> Self {
        Self {
            url: config.forecast_url.clone(),
            http,
        }
    }
}

#[derive(Debug, Serialize)]
struct ForecastQuery {
    latitude: f64,
    longitude: f64,
    current_weather: bool,
    temperature_unit: &'static str,
    windspeed_unit: &'static str,
    timezone: &'static str,
}

impl ForecastQuery {
    fn new(latitude: f64, longitude: f64, units: UnitSystem) -> Self {
        Self {
            latitude,
            longitude,
            current_weather: true,
            temperature_unit: units.temperature_token(),
            windspeed_unit: units.wind_speed_token(),
            timezone: "auto",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    weathercode: Option<i32>,
}

#[async_trait]
impl WeatherSource for OpenMeteoForecast {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<WeatherReading> {
        let query = ForecastQuery::new(latitude, longitude, units);
        debug!(?query, url = %self.url, "fetching current weather");

        let request = self.http.get(&self.url).query(&query);
        let body = send_for_body(Service::Forecast, request).await?;

        let reading = parse_current(&body)?;
        info!(
            temperature = reading.temperature,
            wind_speed = reading.wind_speed,
            code = reading.condition_code,
            %units,
            "current weather"
        );
        Ok(reading)
    }
}

fn parse_current(body: &str) -> Result<WeatherReading> {
    let parsed: ForecastResponse = serde_json::from_str(body)
        .map_err(|err| WeatherError::malformed(Service::Forecast, err.to_string()))?;

    let current = parsed
        .current_weather
        .ok_or_else(|| missing("current_weather"))?;

    Ok(WeatherReading {
        temperature: current.temperature.ok_or_else(|| missing("temperature"))?,
        wind_speed: current.windspeed.ok_or_else(|| missing("windspeed"))?,
        condition_code: current.weathercode.ok_or_else(|| missing("weathercode"))?,
    })
}

fn missing(field: &str) -> WeatherError {
    WeatherError::malformed(Service::Forecast, format!("missing field `{field}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: &str = r#"{
        "latitude": -24.625,
        "longitude": 25.875,
        "timezone": "Africa/Gaborone",
        "current_weather_units": {"temperature": "°C", "windspeed": "km/h"},
        "current_weather": {
            "time": "2024-01-15T14:00",
            "interval": 900,
            "temperature": 31.4,
            "windspeed": 12.6,
            "winddirection": 80,
            "is_day": 1,
            "weathercode": 2
        }
    }"#;

    fn malformed_detail(body: &str) -> String {
        match parse_current(body).unwrap_err() {
            WeatherError::MalformedResponse { service, detail } => {
                assert_eq!(service, Service::Forecast);
                detail
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parses_current_weather_block() {
        let reading = parse_current(CURRENT).unwrap();

        assert_eq!(
            reading,
            WeatherReading {
                temperature: 31.4,
                wind_speed: 12.6,
                condition_code: 2,
            }
        );
    }

    #[test]
    fn missing_block_is_malformed() {
        let detail = malformed_detail(r#"{"latitude": 1.0, "longitude": 2.0}"#);
        assert!(detail.contains("current_weather"));
    }

    #[test]
    fn missing_temperature_is_malformed() {
        let detail =
            malformed_detail(r#"{"current_weather": {"windspeed": 3.0, "weathercode": 0}}"#);
        assert!(detail.contains("temperature"));
    }

    #[test]
    fn null_weathercode_is_malformed() {
        let detail = malformed_detail(
            r#"{"current_weather": {"temperature": 3.0, "windspeed": 3.0, "weathercode": null}}"#,
        );
        assert!(detail.contains("weathercode"));
    }

    #[test]
    fn wrong_type_is_malformed() {
        malformed_detail(
            r#"{"current_weather": {"temperature": "warm", "windspeed": 3.0, "weathercode": 0}}"#,
        );
    }

    #[test]
    fn query_carries_unit_tokens() {
        let metric = ForecastQuery::new(1.0, 2.0, UnitSystem::Metric);
        assert_eq!(metric.temperature_unit, "celsius");
        assert_eq!(metric.windspeed_unit, "kmh");

        let imperial = ForecastQuery::new(1.0, 2.0, UnitSystem::Imperial);
        assert_eq!(imperial.temperature_unit, "fahrenheit");
        assert_eq!(imperial.windspeed_unit, "mph");
        assert!(imperial.current_weather);
    }

    #[test]
    fn imperial_request_url_has_imperial_tokens() {
        let cfg = ClientConfig::default();
        let client = OpenMeteoForecast::new(&cfg, cfg.http_client().unwrap());

        let request = client
            .http
            .get(&client.url)
            .query(&ForecastQuery::new(40.713, -74.006, UnitSystem::Imperial))
            .build()
            .unwrap();
        let query = request.url().query().unwrap_or_default();

        assert!(query.contains("temperature_unit=fahrenheit"));
        assert!(query.contains("windspeed_unit=mph"));
        assert!(query.contains("current_weather=true"));
        assert!(query.contains("latitude=40.713"));
    }
}
