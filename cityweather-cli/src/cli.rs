use std::{io::Write, time::Duration};

use anyhow::Context;
use cityweather_core::{
    ClientConfig, Geocoder, OpenMeteoForecast, OpenMeteoGeocoder, UnitSystem, WeatherError,
    WeatherSource,
    config::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL, DEFAULT_LANGUAGE},
    report,
};
use clap::{
    ArgAction, Parser,
    builder::{PossibleValuesParser, TypedValueParser},
};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "cityweather",
    version,
    about = "Current weather for a city (Open-Meteo, no API key)"
)]
pub struct Cli {
    /// City name, e.g. "Gaborone" or "Paris, FR".
    #[arg(value_parser = parse_city)]
    pub city: String,

    /// Units for temperature and wind speed.
    #[arg(
        long,
        default_value_t = UnitSystem::Metric,
        value_parser = PossibleValuesParser::new(UnitSystem::all().iter().map(|u| u.as_str()))
            .try_map(|s| UnitSystem::try_from(s.as_str())),
    )]
    pub units: UnitSystem,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub timeout: u64,

    /// Language for place names.
    #[arg(long, value_name = "CODE", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    #[arg(long, env = "CITYWEATHER_GEOCODING_URL", default_value = DEFAULT_GEOCODING_URL, hide = true)]
    pub geocoding_url: String,

    #[arg(long, env = "CITYWEATHER_FORECAST_URL", default_value = DEFAULT_FORECAST_URL, hide = true)]
    pub forecast_url: String,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_city(value: &str) -> Result<String, String> {
    let city = value.trim();
    if city.is_empty() {
        return Err("city name must not be empty".to_string());
    }
    Ok(city.to_string())
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_language(self.language.as_str())
            .with_endpoints(self.geocoding_url.as_str(), self.forecast_url.as_str())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.client_config();
        let http = config
            .http_client()
            .context("Failed to build HTTP client")?;

        let geocoder = OpenMeteoGeocoder::new(&config, http.clone());
        let weather = OpenMeteoForecast::new(&config, http);

        let mut stdout = std::io::stdout().lock();
        self.execute(&geocoder, &weather, &mut stdout).await
    }

    /// Geocode, fetch and render. Nothing reaches `out` unless every step succeeded.
    pub async fn execute(
        &self,
        geocoder: &dyn Geocoder,
        weather: &dyn WeatherSource,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let location = geocoder.resolve(&self.city).await?;
        let reading = weather
            .fetch(location.latitude, location.longitude, self.units)
            .await?;

        let rendered = report::render(&location, &reading, self.units);
        out.write_all(rendered.as_bytes())
            .context("Failed to write report")?;
        out.flush().context("Failed to write report")?;

        Ok(())
    }
}

/// Process exit status for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = match err.downcast_ref::<WeatherError>() {
        Some(e) if e.is_user_error() => 2,
        _ => 1,
    };
    debug!(error = %err, exit_code = code, "run failed");
    code
}
