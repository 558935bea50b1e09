//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Shared domain models (locations, readings, unit systems)
//! - The WMO condition code table
//! - Open-Meteo geocoding and current-weather clients
//! - Plain-text report rendering
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod conditions;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;

pub use conditions::ConditionEntry;
pub use config::ClientConfig;
pub use error::{NetworkCause, Service, WeatherError};
pub use model::{Location, UnitSystem, WeatherReading};
pub use provider::{Geocoder, OpenMeteoForecast, OpenMeteoGeocoder, WeatherSource};
