#[cfg(test)]
#[path = "air_quality_test.rs"]
mod tests;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AirQualityPayload;

#[derive(Clone)]
pub struct AirQualityClient {
    url: String,
}

impl Default for AirQualityClient {
    fn default() -> AirQualityClient {
        return AirQualityClient {
            url: Config::get(ConfigKey::AirQualityURL),
        };
    }
}

impl AirQualityClient {
    #[cfg(test)]
    pub(crate) fn with_url(url: String) -> AirQualityClient {
        return AirQualityClient { url };
    }

    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<AirQualityPayload> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "us_aqi,european_aqi".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<AirQualityPayload>()
            .await?;

        return Ok(res);
    }
}
