use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Session;
use crate::domain::models::Theme;
use crate::domain::models::Unit;

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

/// JSON file backed preference store. Each key lives in its own file under
/// the data directory so a corrupt value only loses that one key.
#[derive(Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Default for Store {
    fn default() -> Store {
        let data_dir = Config::get(ConfigKey::DataDir);
        if !data_dir.is_empty() {
            return Store::new(PathBuf::from(data_dir));
        }

        return Store::new(dirs::data_dir().unwrap().join("drizzle"));
    }
}

impl Store {
    pub fn new(dir: impl AsRef<Path>) -> Store {
        return Store {
            dir: dir.as_ref().to_path_buf(),
        };
    }

    pub fn dir(&self) -> &Path {
        return &self.dir;
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path).await?;
        let value = serde_json::from_str::<T>(&contents)?;

        return Ok(Some(value));
    }

    async fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string(value)?;
        fs::write(self.dir.join(file), json).await?;

        return Ok(());
    }

    async fn remove(&self, file: &str) -> Result<()> {
        let path = self.dir.join(file);
        if path.exists() {
            fs::remove_file(path).await?;
        }

        return Ok(());
    }

    pub async fn session(&self) -> Result<Option<Session>> {
        return self.read("session.json").await;
    }

    pub async fn set_session(&self, session: &Session) -> Result<()> {
        return self.write("session.json", session).await;
    }

    pub async fn clear_session(&self) -> Result<()> {
        return self.remove("session.json").await;
    }

    pub async fn favorites(&self) -> Result<Vec<String>> {
        return Ok(self.read("favorites.json").await?.unwrap_or_default());
    }

    pub async fn set_favorites(&self, favorites: &Vec<String>) -> Result<()> {
        return self.write("favorites.json", favorites).await;
    }

    pub async fn history(&self) -> Result<Vec<String>> {
        return Ok(self.read("history.json").await?.unwrap_or_default());
    }

    pub async fn set_history(&self, history: &Vec<String>) -> Result<()> {
        return self.write("history.json", history).await;
    }

    pub async fn theme(&self) -> Result<Theme> {
        return Ok(self.read("theme.json").await?.unwrap_or_default());
    }

    pub async fn set_theme(&self, theme: &Theme) -> Result<()> {
        return self.write("theme.json", theme).await;
    }

    pub async fn unit(&self) -> Result<Unit> {
        return Ok(self.read("unit.json").await?.unwrap_or_default());
    }

    pub async fn set_unit(&self, unit: &Unit) -> Result<()> {
        return self.write("unit.json", unit).await;
    }

    pub async fn last_city(&self) -> Result<Option<String>> {
        return self.read("last_city.json").await;
    }

    pub async fn set_last_city(&self, city: &str) -> Result<()> {
        return self.write("last_city.json", &city.to_string()).await;
    }
}
