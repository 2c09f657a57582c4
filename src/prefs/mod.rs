//! Locally persisted user preferences
//!
//! Favorites and the theme flag are two independent stores over one shared
//! key/value backend. Both rehydrate on construction and rewrite their value
//! on every change.

mod favorites;
mod storage;
mod theme;

pub use favorites::{FavoriteSet, FavoritesStore, favorite_label};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use theme::ThemeStore;

use std::sync::Arc;

/// Open the platform storage, falling back to memory when no data directory
/// can be determined
pub fn open_storage() -> Arc<dyn Storage> {
    match FileStorage::open_default() {
        Ok(storage) => {
            tracing::info!("Preferences stored in {:?}", storage.dir());
            Arc::new(storage)
        }
        Err(e) => {
            tracing::error!("Preferences will not persist: {}", e);
            Arc::new(MemoryStorage::new())
        }
    }
}
