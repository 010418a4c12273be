#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::Store;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::ResolvedCity;
use crate::domain::models::WeatherReport;
use crate::domain::models::WeatherSnapshot;
use crate::infrastructure::clients::AirQualityClient;
use crate::infrastructure::clients::ForecastClient;
use crate::infrastructure::clients::GeocodingClient;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /unit (/u) - Toggles between Celsius and Fahrenheit and refreshes the displayed city.
- /theme (/t) - Toggles between the light and dark theme.
- /favorite (/fav, /f) - Adds or removes the displayed city from your favorites.
- /favclear (/fc) - Clears all favorites.
- /histclear (/hc) - Clears the search history.
- /name (/n) [NAME] - Updates your profile name.
- /locate (/l) - Shows the weather for the configured latitude and longitude.
- /voice (/v) - Voice search. Not available in a terminal.
- /logout - Clears the session and returns to the login screen.
- /quit /exit (/q) - Exit Drizzle.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up/Down arrows - Move through city suggestions.
- Enter - Search for the typed city, or pick the highlighted suggestion.
- Esc - Dismiss suggestions.
- Tab - Switch fields on the login screen.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

#[derive(Clone, Default)]
pub struct Clients {
    pub geocoding: GeocodingClient,
    pub forecast: ForecastClient,
    pub air_quality: AirQualityClient,
}

async fn fetch_weather(
    clients: &Clients,
    store: &Store,
    tx: &mpsc::UnboundedSender<Event>,
    city: ResolvedCity,
    record_history: bool,
) -> Result<()> {
    let unit = store.unit().await.unwrap_or_default();
    let res = tokio::try_join!(
        clients.forecast.fetch(city.latitude, city.longitude, unit),
        clients.air_quality.fetch(city.latitude, city.longitude)
    );

    match res {
        Ok((forecast, air_quality)) => {
            tx.send(Event::WeatherReady(WeatherReport {
                city: city.name,
                country: city.country,
                record_history,
                snapshot: WeatherSnapshot::build(forecast, air_quality),
            }))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "weather request failed");
            tx.send(Event::Notice("Error fetching weather details.".to_string()))?;
        }
    }

    return Ok(());
}

async fn search_city(
    clients: &Clients,
    store: &Store,
    tx: &mpsc::UnboundedSender<Event>,
    query: String,
) -> Result<()> {
    let resolved = match clients.geocoding.resolve(&query).await {
        Ok(resolved) => resolved,
        Err(err) => {
            tracing::error!(error = ?err, "geocoding request failed");
            tx.send(Event::Notice("Network error.".to_string()))?;
            return Ok(());
        }
    };

    let Some(city) = resolved else {
        tx.send(Event::Notice(format!("City \"{query}\" not found.")))?;
        return Ok(());
    };

    return fetch_weather(clients, store, tx, city, true).await;
}

// Suggestion failures are swallowed. A dropdown that silently stays empty
// beats a toast on every keystroke while offline.
async fn fetch_suggestions(
    geocoding: &GeocodingClient,
    tx: &mpsc::UnboundedSender<Event>,
    query: String,
) -> Result<()> {
    match geocoding.suggest(&query).await {
        Ok(candidates) => {
            tx.send(Event::Suggestions(candidates))?;
        }
        Err(err) => {
            tracing::debug!(error = ?err, "suggestion request failed");
        }
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let clients = Clients::default();
        let store = Store::default();

        // Lazy default.
        let mut suggest_worker: JoinHandle<Result<()>> = tokio::spawn(async {
            return Ok(());
        });

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            let worker_clients = clients.clone();
            let worker_store = store.clone();
            match action.unwrap() {
                Action::Search(query) => {
                    tokio::spawn(async move {
                        return search_city(&worker_clients, &worker_store, &worker_tx, query)
                            .await;
                    });
                }
                Action::FetchCoordinates(latitude, longitude) => {
                    tokio::spawn(async move {
                        let city = ResolvedCity {
                            latitude,
                            longitude,
                            name: "Your Location".to_string(),
                            country: String::new(),
                        };
                        return fetch_weather(
                            &worker_clients,
                            &worker_store,
                            &worker_tx,
                            city,
                            false,
                        )
                        .await;
                    });
                }
                Action::Suggest(query) => {
                    suggest_worker.abort();
                    suggest_worker = tokio::spawn(async move {
                        return fetch_suggestions(&worker_clients.geocoding, &worker_tx, query)
                            .await;
                    });
                }
            }
        }
    }
}
