#[cfg(test)]
#[path = "geocoding_test.rs"]
mod tests;

use anyhow::Result;
use serde::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GeoCandidate;
use crate::domain::models::ResolvedCity;

#[derive(Default, Debug, Clone, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Default, Debug, Clone, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Clone)]
pub struct GeocodingClient {
    url: String,
}

impl Default for GeocodingClient {
    fn default() -> GeocodingClient {
        return GeocodingClient {
            url: Config::get(ConfigKey::GeocodingURL),
        };
    }
}

impl GeocodingClient {
    #[cfg(test)]
    pub(crate) fn with_url(url: String) -> GeocodingClient {
        return GeocodingClient { url };
    }

    /// Best match for a city name. `Ok(None)` means the name matched nothing,
    /// which is not an error.
    pub async fn resolve(&self, city: &str) -> Result<Option<ResolvedCity>> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<GeocodingResponse>()
            .await?;

        let Some(first) = res.results.into_iter().next() else {
            return Ok(None);
        };

        return Ok(Some(ResolvedCity {
            latitude: first.latitude,
            longitude: first.longitude,
            name: first.name,
            country: first.country,
        }));
    }

    /// Up to five candidates for the suggestion dropdown.
    pub async fn suggest(&self, query: &str) -> Result<Vec<GeoCandidate>> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .query(&[
                ("name", query),
                ("count", "5"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<GeocodingResponse>()
            .await?;

        let candidates = res
            .results
            .into_iter()
            .map(|result| {
                return GeoCandidate {
                    name: result.name,
                    country: result.country,
                };
            })
            .collect();

        return Ok(candidates);
    }
}
