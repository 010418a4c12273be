use tempfile::tempdir;

use super::Store;
use crate::domain::models::Session;
use crate::domain::models::Theme;
use crate::domain::models::Unit;

#[tokio::test]
async fn it_defaults_when_files_are_missing() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path());

    assert!(store.session().await.unwrap().is_none());
    assert!(store.favorites().await.unwrap().is_empty());
    assert!(store.history().await.unwrap().is_empty());
    assert_eq!(store.theme().await.unwrap(), Theme::Light);
    assert_eq!(store.unit().await.unwrap(), Unit::Celsius);
    assert!(store.last_city().await.unwrap().is_none());
}

#[tokio::test]
async fn it_round_trips_session() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path());

    let session = Session {
        name: "Ada".to_string(),
        contact: "ada@example.com".to_string(),
        last_login: "2026-08-30T10:00:00Z".to_string(),
    };
    store.set_session(&session).await.unwrap();

    let loaded = store.session().await.unwrap().unwrap();
    assert_eq!(loaded.name, "Ada");
    assert_eq!(loaded.contact, "ada@example.com");

    store.clear_session().await.unwrap();
    assert!(store.session().await.unwrap().is_none());
}

#[tokio::test]
async fn it_round_trips_preferences() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path());

    store.set_theme(&Theme::Dark).await.unwrap();
    store.set_unit(&Unit::Fahrenheit).await.unwrap();
    store.set_last_city("Paris").await.unwrap();
    store
        .set_favorites(&vec!["Paris, France".to_string()])
        .await
        .unwrap();
    store
        .set_history(&vec!["Paris, France".to_string(), "Tokyo, Japan".to_string()])
        .await
        .unwrap();

    assert_eq!(store.theme().await.unwrap(), Theme::Dark);
    assert_eq!(store.unit().await.unwrap(), Unit::Fahrenheit);
    assert_eq!(store.last_city().await.unwrap().unwrap(), "Paris");
    assert_eq!(store.favorites().await.unwrap(), vec!["Paris, France"]);
    assert_eq!(store.history().await.unwrap().len(), 2);
}

#[tokio::test]
async fn it_survives_a_corrupt_file() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path());

    tokio::fs::write(dir.path().join("unit.json"), "not json")
        .await
        .unwrap();

    assert!(store.unit().await.is_err());
    // Other keys are unaffected.
    assert_eq!(store.theme().await.unwrap(), Theme::Light);
}
