//! Favorite launches, persisted across restarts.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::storage::Storage;

/// Storage key for the favorites list
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered set of favorite launch ids (insertion order, no duplicates)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// The set with `id` added if absent, removed if present
    pub fn toggled(&self, id: &str) -> FavoriteSet {
        let mut ids = self.ids.clone();
        if let Some(pos) = ids.iter().position(|i| i == id) {
            ids.remove(pos);
        } else {
            ids.push(id.to_string());
        }
        FavoriteSet { ids }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Build from a stored list, dropping repeated ids
    fn from_stored(stored: Vec<String>) -> Self {
        let mut set = FavoriteSet::default();
        for id in stored {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }
}

/// Owner of the favorite set. Every toggle rewrites the stored list.
pub struct FavoritesStore {
    set: FavoriteSet,
    storage: Arc<dyn Storage>,
}

impl FavoritesStore {
    /// Rehydrate favorites from storage.
    ///
    /// A missing or unreadable value yields an empty set.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let set = match storage.read(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => FavoriteSet::from_stored(ids),
                Err(e) => {
                    tracing::warn!("Ignoring malformed favorites: {}", e);
                    FavoriteSet::default()
                }
            },
            Ok(None) => FavoriteSet::default(),
            Err(e) => {
                tracing::warn!("Failed to read favorites: {}", e);
                FavoriteSet::default()
            }
        };

        tracing::debug!("Loaded {} favorites", set.len());
        Self { set, storage }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.set.contains(id)
    }

    pub fn set(&self) -> &FavoriteSet {
        &self.set
    }

    /// Flip membership of `id` and persist. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.set = self.set.toggled(id);
        self.persist();
        self.set.contains(id)
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.set)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.write(FAVORITES_KEY, &json));

        if let Err(e) = result {
            tracing::error!("Failed to save favorites: {}", e);
        }
    }
}

/// Accessible label of the favorite control
pub fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Remove favorite"
    } else {
        "Add to favorites"
    }
}
