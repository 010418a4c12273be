use serde::Deserialize;
use serde::Serialize;

/// A single entry of the live suggestion list shown under the search box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoCandidate {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

impl GeoCandidate {
    pub fn label(&self) -> String {
        return format!("{}, {}", self.name, self.country);
    }
}

/// The best geocoding match for a searched city.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCity {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}
