use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Store;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::GeoCandidate;
use crate::domain::models::Session;
use crate::domain::models::SlashCommand;
use crate::domain::models::Theme;
use crate::domain::models::Unit;
use crate::domain::models::WeatherReport;
use crate::domain::models::WeatherSnapshot;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

const TOAST_DURATION: Duration = Duration::from_secs(3);
const HISTORY_LIMIT: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

pub struct Toast {
    pub text: String,
    shown_at: Instant,
}

pub struct DisplayedCity {
    pub name: String,
    pub country: String,
}

pub struct AppState {
    pub screen: Screen,
    pub session: Option<Session>,
    pub favorites: Vec<String>,
    pub history: Vec<String>,
    pub theme: Theme,
    pub unit: Unit,
    pub displayed: Option<DisplayedCity>,
    pub snapshot: Option<WeatherSnapshot>,
    pub suggestions: Vec<GeoCandidate>,
    pub selected_suggestion: Option<usize>,
    pub toast: Option<Toast>,
    pub waiting_for_weather: bool,
    last_city: Option<String>,
    store: Store,
}

impl AppState {
    pub async fn new(store: Store) -> Result<AppState> {
        let session = store.session().await.unwrap_or(None);
        let screen = if session.is_some() {
            Screen::Dashboard
        } else {
            Screen::Login
        };

        return Ok(AppState {
            screen,
            session,
            favorites: store.favorites().await.unwrap_or_default(),
            history: store.history().await.unwrap_or_default(),
            theme: store.theme().await.unwrap_or_default(),
            unit: store.unit().await.unwrap_or_default(),
            displayed: None,
            snapshot: None,
            suggestions: vec![],
            selected_suggestion: None,
            toast: None,
            waiting_for_weather: false,
            last_city: store.last_city().await.unwrap_or(None),
            store,
        });
    }

    /// The search to replay when the dashboard comes up with a remembered
    /// city.
    pub fn startup_action(&self) -> Option<Action> {
        if self.screen != Screen::Dashboard {
            return None;
        }

        return self.last_city.clone().map(Action::Search);
    }

    pub fn notice(&mut self, text: &str) {
        self.toast = Some(Toast {
            text: text.to_string(),
            shown_at: Instant::now(),
        });
    }

    pub fn tick(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() >= TOAST_DURATION {
                self.toast = None;
            }
        }
    }

    pub async fn login(&mut self, name: &str, contact: &str) -> Result<Option<Action>> {
        let name = name.trim();
        let contact = contact.trim();
        if name.is_empty() || contact.is_empty() {
            self.notice("Please fill in all details.");
            return Ok(None);
        }

        let session = Session {
            name: name.to_string(),
            contact: contact.to_string(),
            last_login: chrono::Utc::now().to_rfc3339(),
        };
        self.store.set_session(&session).await?;
        self.session = Some(session);
        self.screen = Screen::Dashboard;
        self.notice(&format!("Welcome back, {name}!"));

        return Ok(self.last_city.clone().map(Action::Search));
    }

    pub fn handle_suggestions(&mut self, candidates: Vec<GeoCandidate>) {
        self.suggestions = candidates;
        self.selected_suggestion = None;
    }

    pub fn clear_suggestions(&mut self) {
        self.suggestions = vec![];
        self.selected_suggestion = None;
    }

    pub fn suggestion_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }

        self.selected_suggestion = match self.selected_suggestion {
            None => Some(0),
            Some(idx) => Some((idx + 1).min(self.suggestions.len() - 1)),
        };
    }

    pub fn suggestion_up(&mut self) {
        self.selected_suggestion = match self.selected_suggestion {
            None | Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
    }

    pub async fn handle_weather_ready(&mut self, report: WeatherReport) -> Result<()> {
        self.waiting_for_weather = false;

        if report.record_history {
            self.record_search(&report.city, &report.country).await?;
            self.store.set_last_city(&report.city).await?;
            self.last_city = Some(report.city.clone());
        }

        self.displayed = Some(DisplayedCity {
            name: report.city,
            country: report.country,
        });
        self.snapshot = Some(report.snapshot);

        return Ok(());
    }

    /// Most recent first, deduplicated, capped at five entries.
    async fn record_search(&mut self, city: &str, country: &str) -> Result<()> {
        let entry = format!("{city}, {country}");
        self.history.retain(|item| return item != &entry);
        self.history.insert(0, entry);
        self.history.truncate(HISTORY_LIMIT);
        self.store.set_history(&self.history).await?;

        return Ok(());
    }

    /// Mirrors the favorite heart indicator, which matches on substring. A
    /// favorited "Paris, France" also lights up for a displayed "Paris".
    pub fn is_favorite(&self, city: &str) -> bool {
        return self.favorites.iter().any(|item| return item.contains(city));
    }

    async fn toggle_favorite(&mut self) -> Result<()> {
        let Some(displayed) = &self.displayed else {
            return Ok(());
        };

        let entry = format!("{}, {}", displayed.name, displayed.country);
        if let Some(idx) = self.favorites.iter().position(|item| return item == &entry) {
            self.favorites.remove(idx);
        } else {
            self.favorites.push(entry);
        }
        self.store.set_favorites(&self.favorites).await?;

        return Ok(());
    }

    async fn locate(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let latitude = Config::get(ConfigKey::Latitude);
        let longitude = Config::get(ConfigKey::Longitude);
        if latitude.is_empty() || longitude.is_empty() {
            self.notice("Geolocation is not supported in this terminal.");
            return Ok(());
        }

        match (latitude.parse::<f64>(), longitude.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) => {
                self.waiting_for_weather = true;
                tx.send(Action::FetchCoordinates(latitude, longitude))?;
            }
            _ => {
                self.notice("Unable to retrieve your location.");
            }
        }

        return Ok(());
    }

    /// Runs a slash command. Returns true when the app should quit.
    pub async fn handle_slash_command(
        &mut self,
        command: SlashCommand,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if command.is_quit() {
            return Ok(true);
        }

        if command.is_help() {
            self.notice("Commands: /unit /theme /fav /favclear /histclear /name /locate /logout /quit. See drizzle --help.");
        } else if command.is_unit_toggle() {
            self.unit = self.unit.toggled();
            self.store.set_unit(&self.unit).await?;
            // Refreshing re-resolves the displayed city by name, the
            // coordinates are not kept around.
            if let Some(displayed) = &self.displayed {
                self.waiting_for_weather = true;
                tx.send(Action::Search(displayed.name.clone()))?;
            }
        } else if command.is_theme_toggle() {
            self.theme = self.theme.toggled();
            self.store.set_theme(&self.theme).await?;
        } else if command.is_favorite_toggle() {
            self.toggle_favorite().await?;
        } else if command.is_clear_favorites() {
            self.favorites.clear();
            self.store.set_favorites(&self.favorites).await?;
            self.notice("Favorites cleared.");
        } else if command.is_clear_history() {
            self.history.clear();
            self.store.set_history(&self.history).await?;
            self.notice("Search history cleared.");
        } else if command.is_name_set() {
            self.set_profile_name(command.args.join(" ").trim()).await?;
        } else if command.is_locate() {
            self.locate(tx).await?;
        } else if command.is_voice() {
            self.notice("Voice search is not supported in this terminal.");
        } else if command.is_logout() {
            self.logout().await?;
        }

        return Ok(false);
    }

    async fn set_profile_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            self.notice("Please fill in all details.");
            return Ok(());
        }

        if let Some(session) = &mut self.session {
            session.name = name.to_string();
            self.store.set_session(session).await?;
            self.notice("Profile name updated!");
        }

        return Ok(());
    }

    async fn logout(&mut self) -> Result<()> {
        self.store.clear_session().await?;
        self.session = None;
        self.screen = Screen::Login;
        self.displayed = None;
        self.snapshot = None;
        self.clear_suggestions();
        self.waiting_for_weather = false;

        return Ok(());
    }
}
