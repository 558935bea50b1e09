use async_trait::async_trait;
use reqwest::RequestBuilder;
use std::fmt::Debug;
use tracing::debug;

use crate::{
    error::{Result, Service, WeatherError},
    model::{Location, UnitSystem, WeatherReading},
};

pub mod forecast;
pub mod geocoding;

pub use forecast::OpenMeteoForecast;
pub use geocoding::OpenMeteoGeocoder;

/// Resolves a free-text city name to the best matching place.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> Result<Location>;
}

/// Fetches current conditions for a coordinate pair.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, latitude: f64, longitude: f64, units: UnitSystem)
    -> Result<WeatherReading>;
}

/// Send a prepared GET and return the body of a 2xx response.
async fn send_for_body(service: Service, request: RequestBuilder) -> Result<String> {
    let res = request
        .send()
        .await
        .map_err(|err| WeatherError::transport(service, err))?;

    let status = res.status();
    debug!(%service, %status, "response received");

    let body = res
        .text()
        .await
        .map_err(|err| WeatherError::transport(service, err))?;

    if !status.is_success() {
        return Err(WeatherError::status(service, status, &body));
    }

    Ok(body)
}
