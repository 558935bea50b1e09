use std::fmt;

use thiserror::Error;

pub use reqwest::StatusCode;

/// The remote service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Geocoding,
    Forecast,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Geocoding => "geocoding service",
            Service::Forecast => "weather service",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can abort a single weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The city name was empty after trimming. Detected before any request.
    #[error("city name must not be empty")]
    InvalidCity,

    #[error("no results found for '{city}'; try a larger city or add a country (e.g. 'Paris, FR')")]
    CityNotFound { city: String },

    #[error("network error talking to the {service}")]
    Network {
        service: Service,
        #[source]
        source: NetworkCause,
    },

    #[error("malformed response from the {service}: {detail}")]
    MalformedResponse { service: Service, detail: String },
}

/// Underlying cause of a [`WeatherError::Network`].
#[derive(Debug, Error)]
pub enum NetworkCause {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status {
        status: StatusCode,
        body: String,
    },
}

impl WeatherError {
    pub(crate) fn transport(service: Service, err: reqwest::Error) -> Self {
        Self::Network {
            service,
            source: NetworkCause::Transport(err),
        }
    }

    pub(crate) fn status(service: Service, status: StatusCode, body: &str) -> Self {
        Self::Network {
            service,
            source: NetworkCause::Status {
                status,
                body: truncate_body(body),
            },
        }
    }

    pub(crate) fn malformed(service: Service, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            service,
            detail: detail.into(),
        }
    }

    /// Errors caused by what the user typed rather than by the services.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidCity | Self::CityNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;

/// Flatten to one line and cap the length, so the body fits in a one-line diagnostic.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    let body = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if body.len() <= MAX {
        return body;
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
