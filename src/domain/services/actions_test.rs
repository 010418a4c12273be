use anyhow::bail;
use anyhow::Result;
use mockito::Matcher;
use tempfile::tempdir;
use tokio::sync::mpsc;

use super::fetch_suggestions;
use super::fetch_weather;
use super::search_city;
use super::Clients;
use super::Store;
use crate::domain::models::Event;
use crate::domain::models::ResolvedCity;
use crate::domain::models::Unit;
use crate::domain::models::WeatherReport;

const PARIS_BODY: &str = r#"{
    "results": [
        {"latitude": 48.85341, "longitude": 2.3488, "name": "Paris", "country": "France"}
    ]
}"#;

fn to_report(event: Option<Event>) -> Result<WeatherReport> {
    let report = match event.unwrap() {
        Event::WeatherReady(report) => report,
        _ => bail!("Wrong type from recv"),
    };

    return Ok(report);
}

fn to_notice(event: Option<Event>) -> Result<String> {
    let notice = match event.unwrap() {
        Event::Notice(text) => text,
        _ => bail!("Wrong type from recv"),
    };

    return Ok(notice);
}

struct Harness {
    geocoding: mockito::ServerGuard,
    forecast: mockito::ServerGuard,
    air_quality: mockito::ServerGuard,
}

impl Harness {
    fn new() -> Harness {
        return Harness {
            geocoding: mockito::Server::new(),
            forecast: mockito::Server::new(),
            air_quality: mockito::Server::new(),
        };
    }

    fn clients(&self) -> Clients {
        return Clients {
            geocoding: crate::infrastructure::clients::GeocodingClient::with_url(
                self.geocoding.url(),
            ),
            forecast: crate::infrastructure::clients::ForecastClient::with_url(self.forecast.url()),
            air_quality: crate::infrastructure::clients::AirQualityClient::with_url(
                self.air_quality.url(),
            ),
        };
    }
}

#[tokio::test]
async fn it_reports_weather_for_a_city() -> Result<()> {
    let mut harness = Harness::new();
    let geo_mock = harness
        .geocoding
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(PARIS_BODY)
        .create();
    let forecast_mock = harness
        .forecast
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(test_utils::forecast_fixture())
        .create();
    let aqi_mock = harness
        .air_quality
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(test_utils::air_quality_fixture(42.0))
        .create();

    let dir = tempdir()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    search_city(
        &harness.clients(),
        &Store::new(dir.path()),
        &tx,
        "Paris".to_string(),
    )
    .await?;

    let report = to_report(rx.recv().await)?;
    assert_eq!(report.city, "Paris");
    assert_eq!(report.country, "France");
    assert!(report.record_history);
    assert_eq!(report.snapshot.us_aqi, 42.0);
    assert_eq!(report.snapshot.current.temperature_2m, 21.6);
    geo_mock.assert();
    forecast_mock.assert();
    aqi_mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_notifies_when_a_city_is_unknown() -> Result<()> {
    let mut harness = Harness::new();
    harness
        .geocoding
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"generationtime_ms": 0.5}"#)
        .create();

    let dir = tempdir()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    search_city(
        &harness.clients(),
        &Store::new(dir.path()),
        &tx,
        "Xyzzy".to_string(),
    )
    .await?;

    assert_eq!(to_notice(rx.recv().await)?, "City \"Xyzzy\" not found.");

    return Ok(());
}

#[tokio::test]
async fn it_notifies_on_geocoding_failures() -> Result<()> {
    let mut harness = Harness::new();
    harness.geocoding.mock("GET", "/").match_query(Matcher::Any).with_status(500).create();

    let dir = tempdir()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    search_city(
        &harness.clients(),
        &Store::new(dir.path()),
        &tx,
        "Paris".to_string(),
    )
    .await?;

    assert_eq!(to_notice(rx.recv().await)?, "Network error.");

    return Ok(());
}

#[tokio::test]
async fn it_notifies_on_forecast_failures() -> Result<()> {
    let mut harness = Harness::new();
    harness
        .geocoding
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(PARIS_BODY)
        .create();
    harness.forecast.mock("GET", "/").match_query(Matcher::Any).with_status(503).create();
    harness
        .air_quality
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(test_utils::air_quality_fixture(42.0))
        .create();

    let dir = tempdir()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    search_city(
        &harness.clients(),
        &Store::new(dir.path()),
        &tx,
        "Paris".to_string(),
    )
    .await?;

    assert_eq!(
        to_notice(rx.recv().await)?,
        "Error fetching weather details."
    );

    return Ok(());
}

#[tokio::test]
async fn it_fetches_weather_with_the_stored_unit() -> Result<()> {
    let mut harness = Harness::new();
    let forecast_mock = harness
        .forecast
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded(
            "temperature_unit".to_string(),
            "fahrenheit".to_string(),
        ))
        .with_status(200)
        .with_body(test_utils::forecast_fixture())
        .create();
    harness
        .air_quality
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(test_utils::air_quality_fixture(10.0))
        .create();

    let dir = tempdir()?;
    let store = Store::new(dir.path());
    store.set_unit(&Unit::Fahrenheit).await?;

    let city = ResolvedCity {
        latitude: 48.85341,
        longitude: 2.3488,
        name: "Paris".to_string(),
        country: "France".to_string(),
    };
    let (tx, mut rx) = mpsc::unbounded_channel();
    fetch_weather(&harness.clients(), &store, &tx, city, true).await?;

    to_report(rx.recv().await)?;
    forecast_mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_skips_history_for_coordinate_lookups() -> Result<()> {
    let mut harness = Harness::new();
    harness
        .forecast
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(test_utils::forecast_fixture())
        .create();
    harness
        .air_quality
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(test_utils::air_quality_missing_fixture())
        .create();

    let dir = tempdir()?;
    let city = ResolvedCity {
        latitude: 45.5,
        longitude: -73.5,
        name: "Your Location".to_string(),
        country: String::new(),
    };
    let (tx, mut rx) = mpsc::unbounded_channel();
    fetch_weather(
        &harness.clients(),
        &Store::new(dir.path()),
        &tx,
        city,
        false,
    )
    .await?;

    let report = to_report(rx.recv().await)?;
    assert_eq!(report.city, "Your Location");
    assert!(!report.record_history);
    assert_eq!(report.snapshot.us_aqi, 0.0);

    return Ok(());
}

#[tokio::test]
async fn it_sends_suggestions() -> Result<()> {
    let mut harness = Harness::new();
    harness
        .geocoding
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(PARIS_BODY)
        .create();

    let (tx, mut rx) = mpsc::unbounded_channel();
    fetch_suggestions(&harness.clients().geocoding, &tx, "Par".to_string()).await?;

    match rx.recv().await.unwrap() {
        Event::Suggestions(candidates) => {
            assert_eq!(candidates.len(), 1);
            assert_eq!(candidates[0].label(), "Paris, France");
        }
        _ => bail!("Wrong type from recv"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_stays_quiet_when_suggestions_fail() -> Result<()> {
    let mut harness = Harness::new();
    harness.geocoding.mock("GET", "/").match_query(Matcher::Any).with_status(500).create();

    let (tx, mut rx) = mpsc::unbounded_channel();
    fetch_suggestions(&harness.clients().geocoding, &tx, "Par".to_string()).await?;

    drop(tx);
    assert!(rx.recv().await.is_none());

    return Ok(());
}
