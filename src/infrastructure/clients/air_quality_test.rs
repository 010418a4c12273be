use anyhow::Result;
use mockito::Matcher;

use super::AirQualityClient;

#[tokio::test]
async fn it_fetches_current_air_quality() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded(
            "current".to_string(),
            "us_aqi,european_aqi".to_string(),
        ))
        .with_status(200)
        .with_body(test_utils::air_quality_fixture(42.0))
        .create();

    let client = AirQualityClient::with_url(server.url());
    let payload = client.fetch(48.85341, 2.3488).await?;

    assert_eq!(payload.current.unwrap().us_aqi, Some(42.0));
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_tolerates_locations_without_coverage() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(test_utils::air_quality_missing_fixture())
        .create();

    let client = AirQualityClient::with_url(server.url());
    let payload = client.fetch(0.0, 0.0).await?;

    assert!(payload.current.is_none());
    mock.assert();

    return Ok(());
}
