//! Persisted credential storage

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Where the bearer token survives between runs
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, token: &str) -> Result<()>;

    fn remove(&self) -> Result<()>;
}

/// Stores the token under `auth_token` in the YAML config file
pub struct ConfigTokenStore {
    path: PathBuf,
}

impl ConfigTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for ConfigTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let config = Config::load_from(&self.path)?;
        Ok(config.auth_token.filter(|t| !t.trim().is_empty()))
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut config = Config::load_from(&self.path)?;
        config.auth_token = Some(token.to_string());
        config.save_to(&self.path)
    }

    fn remove(&self) -> Result<()> {
        let mut config = Config::load_from(&self.path)?;
        if config.auth_token.take().is_some() {
            config.save_to(&self.path)?;
        }
        Ok(())
    }
}

/// Process-local token store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: std::sync::Mutex::new(Some(token.to_string())),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.current())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
