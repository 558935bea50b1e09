use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_LANGUAGE: &str = "en";

/// Settings shared by the geocoding and weather clients.
///
/// There is no config file; the binary fills this from flags and leaves
/// everything else at its default.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Applies to each request separately.
    pub timeout: Duration,
    /// Language for place names returned by geocoding.
    pub language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_endpoints(
        mut self,
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        self.geocoding_url = geocoding_url.into();
        self.forecast_url = forecast_url.into();
        self
    }

    /// Build the HTTP client both providers share.
    pub fn http_client(&self) -> reqwest::Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("cityweather/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}
