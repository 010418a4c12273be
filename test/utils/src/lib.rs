//! Shared API payload fixtures mirroring the Open-Meteo response shapes.

/// A forecast payload with 30 hourly entries starting at midnight, seven
/// daily entries, and a stable set of current conditions.
pub fn forecast_fixture() -> String {
    let hours = 30;
    let time = (0..hours)
        .map(|hour| {
            let day = 30 + hour / 24;
            return format!(r#""2026-08-{day}T{:02}:00""#, hour % 24);
        })
        .collect::<Vec<String>>()
        .join(",");
    let temperature = (0..hours)
        .map(|hour| return format!("{}.5", 10 + hour % 12))
        .collect::<Vec<String>>()
        .join(",");
    let weather_code = (0..hours)
        .map(|hour| {
            if hour % 3 == 0 {
                return "0".to_string();
            }
            return "3".to_string();
        })
        .collect::<Vec<String>>()
        .join(",");
    let is_day = (0..hours)
        .map(|hour| {
            if (6..20).contains(&(hour % 24)) {
                return "1".to_string();
            }
            return "0".to_string();
        })
        .collect::<Vec<String>>()
        .join(",");

    return format!(
        r#"{{
            "timezone": "Europe/Paris",
            "current": {{
                "temperature_2m": 21.6,
                "relative_humidity_2m": 58.0,
                "apparent_temperature": 20.9,
                "is_day": 1,
                "weather_code": 2,
                "surface_pressure": 1015.3,
                "wind_speed_10m": 12.4,
                "visibility": 24140.0,
                "wind_direction_10m": 200.0
            }},
            "hourly": {{
                "time": [{time}],
                "temperature_2m": [{temperature}],
                "weather_code": [{weather_code}],
                "is_day": [{is_day}]
            }},
            "daily": {{
                "time": ["2026-08-30", "2026-08-31", "2026-09-01", "2026-09-02", "2026-09-03", "2026-09-04", "2026-09-05"],
                "weather_code": [2, 3, 61, 0, 95, 71, 45],
                "temperature_2m_max": [24.1, 22.5, 19.8, 26.0, 23.3, 18.2, 20.7],
                "temperature_2m_min": [15.2, 14.8, 13.1, 16.4, 15.0, 11.9, 12.6],
                "sunrise": ["2026-08-30T06:48", "2026-08-31T06:49", "2026-09-01T06:51", "2026-09-02T06:52", "2026-09-03T06:53", "2026-09-04T06:55", "2026-09-05T06:56"],
                "sunset": ["2026-08-30T20:28", "2026-08-31T20:26", "2026-09-01T20:24", "2026-09-02T20:22", "2026-09-03T20:20", "2026-09-04T20:18", "2026-09-05T20:16"]
            }}
        }}"#
    );
}

/// An air-quality payload carrying a current US AQI reading.
pub fn air_quality_fixture(us_aqi: f64) -> String {
    return format!(
        r#"{{
            "current": {{
                "us_aqi": {us_aqi},
                "european_aqi": 31.0
            }}
        }}"#
    );
}

/// An air-quality payload with no current block, as returned for locations
/// without coverage.
pub fn air_quality_missing_fixture() -> String {
    return r#"{"latitude": 48.85, "longitude": 2.35}"#.to_string();
}
