//! The weather collaborator: current conditions for the town header widget.
//!
//! Data comes from a third-party provider over HTTP; nothing here is a
//! weather service of our own. Open-Meteo is the default because it needs no
//! key; configuring `WEATHER_API_KEY` switches to OpenWeatherMap. Either way
//! the request carries a 5-second timeout and every failure degrades to a
//! neutral "could not load" state.

mod client;
pub mod codes;
mod monitor;
mod types;

pub use client::{WeatherClient, WeatherError};
pub use codes::{describe, icon_for, icon_for_owm, WeatherIcon};
pub use monitor::{WeatherMonitor, WeatherView, UNAVAILABLE_MESSAGE};
pub use types::CurrentConditions;

use std::time::Duration;

/// Lonquimay, La Pampa, Argentina.
pub const SITE_LATITUDE: f64 = -36.4667;
pub const SITE_LONGITUDE: f64 = -63.6167;

/// Client-side cap on a single provider request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed refresh cadence. There is no error-triggered retry; a failed fetch
/// just waits for the next tick.
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Which upstream answers the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherUpstream {
    /// Free, keyless. `base_url` has no trailing slash.
    OpenMeteo { base_url: String },
    /// Keyed alternative with localized descriptions.
    OpenWeatherMap { base_url: String, api_key: String },
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub upstream: WeatherUpstream,
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            latitude: SITE_LATITUDE,
            longitude: SITE_LONGITUDE,
            timezone: "America/Argentina/Buenos_Aires".to_string(),
            upstream: WeatherUpstream::OpenMeteo {
                base_url: "https://api.open-meteo.com".to_string(),
            },
            timeout: REQUEST_TIMEOUT,
            poll_interval: POLL_INTERVAL,
        }
    }
}

impl WeatherConfig {
    /// Default configuration, upgraded to OpenWeatherMap when
    /// `WEATHER_API_KEY` is set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(api_key) = std::env::var("WEATHER_API_KEY") {
            if !api_key.is_empty() {
                config.upstream = WeatherUpstream::OpenWeatherMap {
                    base_url: "https://api.openweathermap.org".to_string(),
                    api_key,
                };
            }
        }
        config
    }
}
