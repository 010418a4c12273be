use serde::Deserialize;
use serde::Serialize;

/// Scalar current conditions, mirroring the forecast endpoint's `current`
/// block field for field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub is_day: i64,
    pub weather_code: i64,
    pub surface_pressure: f64,
    pub wind_speed_10m: f64,
    pub visibility: f64,
    pub wind_direction_10m: f64,
}

/// Time-aligned parallel arrays for the hourly series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub weather_code: Vec<i64>,
    #[serde(default)]
    pub is_day: Vec<i64>,
}

/// Time-aligned parallel arrays for the seven day series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub weather_code: Vec<i64>,
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub sunrise: Vec<String>,
    #[serde(default)]
    pub sunset: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityCurrent {
    pub us_aqi: Option<f64>,
    pub european_aqi: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityPayload {
    pub current: Option<AirQualityCurrent>,
}

/// Everything a single render needs. Rebuilt on every fetch, never cached.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
    pub us_aqi: f64,
}

impl WeatherSnapshot {
    /// Missing air quality readings degrade to 0 ("Good"), not an error.
    pub fn build(forecast: ForecastPayload, air_quality: AirQualityPayload) -> WeatherSnapshot {
        let us_aqi = air_quality
            .current
            .and_then(|current| return current.us_aqi)
            .unwrap_or(0.0);

        return WeatherSnapshot {
            current: forecast.current,
            hourly: forecast.hourly,
            daily: forecast.daily,
            us_aqi,
        };
    }
}

/// A completed fetch travelling from the worker back to the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub record_history: bool,
    pub snapshot: WeatherSnapshot,
}
