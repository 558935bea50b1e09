use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::ClientConfig,
    error::{Result, Service, WeatherError},
    model::Location,
};

use super::{Geocoder, send_for_body};

/// Open-Meteo geocoding search. Needs no API key.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    url: String,
    language: String,
    http: Client,
}

impl OpenMeteoGeocoder {
    pub fn new(config: &ClientConfig, http: Client) -> Self {
        Self {
            url: config.geocoding_url.clone(),
            language: config.language.clone(),
            http,
        }
    }

    /// Only the best match is requested.
    fn search_request(&self, city: &str) -> RequestBuilder {
        self.http.get(&self.url).query(&SearchQuery {
            name: city,
            count: 1,
            language: &self.language,
            format: "json",
        })
    }
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    name: &'a str,
    count: u8,
    language: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country: Option<String>,
    country_code: Option<String>,
    admin1: Option<String>,
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, city: &str) -> Result<Location> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidCity);
        }

        debug!(city, url = %self.url, "geocoding");

        let request = self.search_request(city);
        let body = send_for_body(Service::Geocoding, request).await?;

        let location = parse_search(city, &body)?;
        info!(
            name = %location.display_name,
            latitude = location.latitude,
            longitude = location.longitude,
            "resolved city"
        );
        Ok(location)
    }
}

/// Take the first search result; further candidates are ignored.
fn parse_search(city: &str, body: &str) -> Result<Location> {
    let parsed: SearchResponse = serde_json::from_str(body)
        .map_err(|err| WeatherError::malformed(Service::Geocoding, err.to_string()))?;

    let first = parsed
        .results
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::CityNotFound {
            city: city.to_string(),
        })?;

    let latitude = first
        .latitude
        .ok_or_else(|| WeatherError::malformed(Service::Geocoding, "missing field `latitude`"))?;
    let longitude = first
        .longitude
        .ok_or_else(|| WeatherError::malformed(Service::Geocoding, "missing field `longitude`"))?;

    let display_name = first
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| city.to_string());

    Ok(Location {
        display_name,
        latitude,
        longitude,
        region: first.admin1.filter(|s| !s.is_empty()),
        country: first.country.filter(|s| !s.is_empty()),
        country_code: first.country_code.filter(|s| !s.is_empty()),
    })
}
