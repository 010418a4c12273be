#[cfg(test)]
#[path = "forecast_test.rs"]
mod tests;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ForecastPayload;
use crate::domain::models::Unit;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,surface_pressure,wind_speed_10m,visibility,wind_direction_10m";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,is_day";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset";

#[derive(Clone)]
pub struct ForecastClient {
    url: String,
}

impl Default for ForecastClient {
    fn default() -> ForecastClient {
        return ForecastClient {
            url: Config::get(ConfigKey::ForecastURL),
        };
    }
}

impl ForecastClient {
    #[cfg(test)]
    pub(crate) fn with_url(url: String) -> ForecastClient {
        return ForecastClient { url };
    }

    pub async fn fetch(&self, latitude: f64, longitude: f64, unit: Unit) -> Result<ForecastPayload> {
        let mut query = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];
        if unit == Unit::Fahrenheit {
            query.push(("temperature_unit", "fahrenheit".to_string()));
        }

        let res = reqwest::Client::new()
            .get(&self.url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<ForecastPayload>()
            .await?;

        return Ok(res);
    }
}
