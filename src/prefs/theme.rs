//! Persisted light/dark preference.

use std::sync::Arc;

use super::storage::Storage;

/// Storage key for the dark mode flag
pub const THEME_KEY: &str = "darkMode";

/// Owner of the dark mode flag. Defaults to light.
pub struct ThemeStore {
    dark: bool,
    storage: Arc<dyn Storage>,
}

impl ThemeStore {
    /// Rehydrate the flag; anything other than a stored boolean means light
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let dark = match storage.read(THEME_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed theme flag: {}", e);
                false
            }),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Failed to read theme flag: {}", e);
                false
            }
        };

        Self { dark, storage }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the flag and persist it. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;

        let result = serde_json::to_string(&self.dark)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.write(THEME_KEY, &json));
        if let Err(e) = result {
            tracing::error!("Failed to save theme: {}", e);
        }
        self.dark
    }
}
