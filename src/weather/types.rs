//! Wire shapes for the weather upstreams and the unified conditions record.

use serde::{Deserialize, Serialize};

use super::codes::{self, WeatherIcon};

/// Current conditions as the portal displays and serves them.
///
/// Numeric fields are rounded to integers (the widget shows whole degrees
/// and km/h). Field names serialize in camelCase to match the site's
/// `/api/weather` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: i32,
    pub humidity: i32,
    /// Surface pressure in millibars.
    pub pressure: i32,
    /// Wind speed in km/h.
    pub wind_speed: i32,
    /// WMO code; absent for upstreams that don't report one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_code: Option<u16>,
    pub description: String,
    pub icon: WeatherIcon,
    /// Provider timestamp, carried through as an ISO-8601 string.
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Open-Meteo
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(super) struct OpenMeteoResponse {
    pub current: OpenMeteoCurrent,
}

#[derive(Debug, Deserialize)]
pub(super) struct OpenMeteoCurrent {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub weather_code: u16,
    pub wind_speed_10m: f64,
    pub surface_pressure: f64,
}

impl From<OpenMeteoCurrent> for CurrentConditions {
    fn from(current: OpenMeteoCurrent) -> Self {
        Self {
            temperature: current.temperature_2m.round() as i32,
            humidity: current.relative_humidity_2m.round() as i32,
            pressure: current.surface_pressure.round() as i32,
            // Open-Meteo reports wind in km/h already.
            wind_speed: current.wind_speed_10m.round() as i32,
            description: codes::describe(current.weather_code).to_string(),
            icon: codes::icon_for(current.weather_code),
            weather_code: Some(current.weather_code),
            timestamp: current.time,
        }
    }
}

// ---------------------------------------------------------------------------
// OpenWeatherMap
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(super) struct OwmResponse {
    pub main: OwmMain,
    pub wind: OwmWind,
    pub weather: Vec<OwmWeather>,
    /// Observation time, unix seconds.
    pub dt: i64,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwmMain {
    pub temp: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwmWind {
    /// m/s under metric units; converted to km/h on mapping.
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwmWeather {
    pub description: String,
    pub icon: String,
}

impl From<OwmResponse> for CurrentConditions {
    fn from(response: OwmResponse) -> Self {
        let (description, icon) = response
            .weather
            .first()
            .map(|w| (w.description.clone(), codes::icon_for_owm(&w.icon)))
            .unwrap_or_else(|| ("Desconocido".to_string(), WeatherIcon::Cloudy));
        let timestamp = chrono::DateTime::from_timestamp(response.dt, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();
        Self {
            temperature: response.main.temp.round() as i32,
            humidity: response.main.humidity.round() as i32,
            pressure: response.main.pressure.round() as i32,
            wind_speed: (response.wind.speed * 3.6).round() as i32,
            weather_code: None,
            description,
            icon,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_meteo_payload_maps_and_rounds() {
        let payload = r#"{
            "current": {
                "time": "2026-08-06T14:00",
                "temperature_2m": 11.6,
                "relative_humidity_2m": 54.0,
                "weather_code": 2,
                "wind_speed_10m": 17.4,
                "surface_pressure": 1013.2
            }
        }"#;
        let parsed: OpenMeteoResponse = serde_json::from_str(payload).unwrap();
        let conditions = CurrentConditions::from(parsed.current);
        assert_eq!(conditions.temperature, 12);
        assert_eq!(conditions.humidity, 54);
        assert_eq!(conditions.pressure, 1013);
        assert_eq!(conditions.wind_speed, 17);
        assert_eq!(conditions.weather_code, Some(2));
        assert_eq!(conditions.description, "Parcialmente nublado");
        assert_eq!(conditions.icon, WeatherIcon::PartlyCloudy);
        assert_eq!(conditions.timestamp, "2026-08-06T14:00");
    }

    #[test]
    fn owm_payload_converts_wind_to_kmh() {
        let payload = r#"{
            "main": { "temp": 8.3, "humidity": 71, "pressure": 1009.8 },
            "wind": { "speed": 5.0 },
            "weather": [ { "description": "lluvia ligera", "icon": "10d" } ],
            "dt": 1765000000
        }"#;
        let parsed: OwmResponse = serde_json::from_str(payload).unwrap();
        let conditions = CurrentConditions::from(parsed);
        assert_eq!(conditions.wind_speed, 18); // 5 m/s = 18 km/h
        assert_eq!(conditions.temperature, 8);
        assert_eq!(conditions.icon, WeatherIcon::Rainy);
        assert_eq!(conditions.description, "lluvia ligera");
        assert_eq!(conditions.weather_code, None);
        assert!(conditions.timestamp.starts_with("2025-12-06T"));
    }

    #[test]
    fn conditions_serialize_camel_case() {
        let conditions = CurrentConditions {
            temperature: 12,
            humidity: 54,
            pressure: 1013,
            wind_speed: 17,
            weather_code: Some(2),
            description: "Parcialmente nublado".to_string(),
            icon: WeatherIcon::PartlyCloudy,
            timestamp: "2026-08-06T14:00".to_string(),
        };
        let json = serde_json::to_value(&conditions).unwrap();
        assert_eq!(json["windSpeed"], 17);
        assert_eq!(json["weatherCode"], 2);
        assert_eq!(json["icon"], "partly-cloudy");
    }
}
