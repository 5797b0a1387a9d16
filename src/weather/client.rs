//! HTTP client for the weather upstreams.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::types::{CurrentConditions, OpenMeteoResponse, OwmResponse};
use super::{WeatherConfig, WeatherUpstream};

/// Failures talking to the upstream. All of them are display-degrading, not
/// fatal: callers log and show the neutral unavailable state.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The 5-second client-side cap elapsed; the request was aborted.
    #[error("weather request timed out")]
    Timeout,
    #[error("weather request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("weather upstream returned status {0}")]
    Status(u16),
    #[error("malformed weather payload: {0}")]
    Parse(#[source] reqwest::Error),
}

/// Fetches current conditions from the configured upstream.
pub struct WeatherClient {
    http: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(WeatherError::Request)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// One GET against the configured upstream, mapped to the unified
    /// conditions record.
    pub async fn fetch_current(&self) -> Result<CurrentConditions, WeatherError> {
        match &self.config.upstream {
            WeatherUpstream::OpenMeteo { base_url } => self.fetch_open_meteo(base_url).await,
            WeatherUpstream::OpenWeatherMap { base_url, api_key } => {
                self.fetch_owm(base_url, api_key).await
            }
        }
    }

    async fn fetch_open_meteo(&self, base_url: &str) -> Result<CurrentConditions, WeatherError> {
        let url = format!(
            "{base_url}/v1/forecast?latitude={lat}&longitude={lon}\
             &current=temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,surface_pressure\
             &timezone={tz}",
            lat = self.config.latitude,
            lon = self.config.longitude,
            tz = self.config.timezone,
        );
        debug!(%url, "fetching current conditions");
        let response = self.http.get(&url).send().await.map_err(request_error)?;
        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }
        let payload: OpenMeteoResponse = response.json().await.map_err(WeatherError::Parse)?;
        Ok(payload.current.into())
    }

    async fn fetch_owm(
        &self,
        base_url: &str,
        api_key: &str,
    ) -> Result<CurrentConditions, WeatherError> {
        let url = format!(
            "{base_url}/data/2.5/weather?lat={lat}&lon={lon}&appid={api_key}&units=metric&lang=es",
            lat = self.config.latitude,
            lon = self.config.longitude,
        );
        debug!("fetching current conditions from OpenWeatherMap");
        let response = self.http.get(&url).send().await.map_err(request_error)?;
        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }
        let payload: OwmResponse = response.json().await.map_err(WeatherError::Parse)?;
        Ok(payload.into())
    }
}

fn request_error(err: reqwest::Error) -> WeatherError {
    if err.is_timeout() {
        WeatherError::Timeout
    } else {
        WeatherError::Request(err)
    }
}
