//! Pure lookups from provider weather codes to display strings.
//!
//! Kept as data tables plus mapping functions rather than handler-side
//! conditionals, so the branching is trivially testable and new codes are a
//! one-line addition.

use serde::{Deserialize, Serialize};

/// Icon category the frontend renders. Serialized in kebab-case to match the
/// site's icon names ("partly-cloudy" and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

/// WMO weather interpretation codes → Spanish descriptions.
const DESCRIPTIONS: &[(u16, &str)] = &[
    (0, "Cielo despejado"),
    (1, "Mayormente despejado"),
    (2, "Parcialmente nublado"),
    (3, "Nublado"),
    (45, "Niebla"),
    (48, "Niebla con escarcha"),
    (51, "Llovizna ligera"),
    (53, "Llovizna moderada"),
    (55, "Llovizna densa"),
    (61, "Lluvia ligera"),
    (63, "Lluvia moderada"),
    (65, "Lluvia fuerte"),
    (71, "Nieve ligera"),
    (73, "Nieve moderada"),
    (75, "Nieve fuerte"),
    (77, "Granizo"),
    (80, "Chubascos ligeros"),
    (81, "Chubascos moderados"),
    (82, "Chubascos fuertes"),
    (85, "Nevadas ligeras"),
    (86, "Nevadas fuertes"),
    (95, "Tormenta"),
    (96, "Tormenta con granizo"),
    (99, "Tormenta fuerte con granizo"),
];

/// Human-readable description for a WMO code; unknown codes read as
/// "Desconocido" rather than failing.
pub fn describe(code: u16) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, description)| *description)
        .unwrap_or("Desconocido")
}

/// Icon category for a WMO code.
pub fn icon_for(code: u16) -> WeatherIcon {
    match code {
        0 | 1 => WeatherIcon::Sunny,
        2 => WeatherIcon::PartlyCloudy,
        3 | 45 | 48 => WeatherIcon::Cloudy,
        51..=67 => WeatherIcon::Rainy,
        71..=86 => WeatherIcon::Snowy,
        95..=99 => WeatherIcon::Stormy,
        _ => WeatherIcon::Cloudy,
    }
}

/// Icon category for an OpenWeatherMap icon code ("01d", "10n", ...).
/// The trailing d/n (day/night) is irrelevant for our categories.
pub fn icon_for_owm(icon: &str) -> WeatherIcon {
    match icon.get(..2) {
        Some("01") => WeatherIcon::Sunny,
        Some("02") => WeatherIcon::PartlyCloudy,
        Some("03" | "04" | "50") => WeatherIcon::Cloudy,
        Some("09" | "10") => WeatherIcon::Rainy,
        Some("13") => WeatherIcon::Snowy,
        Some("11") => WeatherIcon::Stormy,
        _ => WeatherIcon::Cloudy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_spanish_descriptions() {
        assert_eq!(describe(0), "Cielo despejado");
        assert_eq!(describe(45), "Niebla");
        assert_eq!(describe(95), "Tormenta");
        assert_eq!(describe(99), "Tormenta fuerte con granizo");
    }

    #[test]
    fn unknown_codes_read_as_desconocido() {
        assert_eq!(describe(42), "Desconocido");
        assert_eq!(describe(1000), "Desconocido");
    }

    #[test]
    fn icon_ranges_follow_the_site_mapping() {
        assert_eq!(icon_for(0), WeatherIcon::Sunny);
        assert_eq!(icon_for(1), WeatherIcon::Sunny);
        assert_eq!(icon_for(2), WeatherIcon::PartlyCloudy);
        assert_eq!(icon_for(3), WeatherIcon::Cloudy);
        assert_eq!(icon_for(48), WeatherIcon::Cloudy);
        assert_eq!(icon_for(51), WeatherIcon::Rainy);
        assert_eq!(icon_for(67), WeatherIcon::Rainy);
        assert_eq!(icon_for(71), WeatherIcon::Snowy);
        assert_eq!(icon_for(86), WeatherIcon::Snowy);
        assert_eq!(icon_for(95), WeatherIcon::Stormy);
        assert_eq!(icon_for(99), WeatherIcon::Stormy);
        // Outside every known range the site shows a generic cloud.
        assert_eq!(icon_for(100), WeatherIcon::Cloudy);
        assert_eq!(icon_for(7), WeatherIcon::Cloudy);
    }

    #[test]
    fn owm_icons_map_day_and_night_alike() {
        assert_eq!(icon_for_owm("01d"), WeatherIcon::Sunny);
        assert_eq!(icon_for_owm("01n"), WeatherIcon::Sunny);
        assert_eq!(icon_for_owm("04d"), WeatherIcon::Cloudy);
        assert_eq!(icon_for_owm("10n"), WeatherIcon::Rainy);
        assert_eq!(icon_for_owm("11d"), WeatherIcon::Stormy);
        assert_eq!(icon_for_owm("13d"), WeatherIcon::Snowy);
        assert_eq!(icon_for_owm(""), WeatherIcon::Cloudy);
    }

    #[test]
    fn icon_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&WeatherIcon::PartlyCloudy).unwrap(),
            "\"partly-cloudy\""
        );
        assert_eq!(serde_json::to_string(&WeatherIcon::Sunny).unwrap(), "\"sunny\"");
    }
}
