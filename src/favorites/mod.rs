//! Favorites store.
//!
//! Keeps the saved-name list in memory and rewrites the whole list under a
//! single key on every mutation. Persistence failures are logged and
//! swallowed: the in-memory list stays authoritative for the running process.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::KeyValueStore;
use crate::models::FavoriteEntry;

/// Key holding the JSON-serialized favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered, name-unique list of saved names.
pub struct FavoritesStore {
    kv: Arc<dyn KeyValueStore>,
    /// Every load-modify-persist cycle holds this lock.
    entries: Mutex<Vec<FavoriteEntry>>,
}

impl FavoritesStore {
    /// Open the store, reading the persisted list once.
    pub async fn open(kv: Arc<dyn KeyValueStore>) -> Self {
        let entries = read_persisted(kv.as_ref()).await;
        tracing::info!("Loaded {} favorites", entries.len());

        Self {
            kv,
            entries: Mutex::new(entries),
        }
    }

    /// Read the persisted list, defaulting to empty on any failure.
    pub async fn load_all(&self) -> Vec<FavoriteEntry> {
        read_persisted(self.kv.as_ref()).await
    }

    /// Snapshot of the current in-memory list.
    pub async fn list(&self) -> Vec<FavoriteEntry> {
        self.entries.lock().await.clone()
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.entries.lock().await.iter().any(|e| e.name == name)
    }

    /// Append `entry` unless one with the same name exists, then persist.
    ///
    /// Returns whether the entry was inserted. The list is persisted either
    /// way.
    pub async fn add(&self, entry: FavoriteEntry) -> bool {
        let mut entries = self.entries.lock().await;

        let inserted = !entries.iter().any(|e| e.name == entry.name);
        if inserted {
            tracing::debug!("Adding favorite {:?}", entry.name);
            entries.push(entry);
        }

        self.persist(&entries).await;
        inserted
    }

    /// Drop every entry named `name`, then persist. Returns how many were removed.
    pub async fn remove(&self, name: &str) -> usize {
        let mut entries = self.entries.lock().await;

        let before = entries.len();
        entries.retain(|e| e.name != name);
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!("Removed favorite {:?}", name);
        }

        self.persist(&entries).await;
        removed
    }

    /// Remove `entry` if saved, add it otherwise. Returns the new state.
    pub async fn toggle(&self, entry: FavoriteEntry) -> bool {
        let mut entries = self.entries.lock().await;

        let now_favorite = if entries.iter().any(|e| e.name == entry.name) {
            entries.retain(|e| e.name != entry.name);
            false
        } else {
            entries.push(entry);
            true
        };

        self.persist(&entries).await;
        now_favorite
    }

    async fn persist(&self, entries: &[FavoriteEntry]) {
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Error encoding favorites: {}", e);
                return;
            }
        };

        if let Err(e) = self.kv.set(FAVORITES_KEY, &raw).await {
            tracing::error!("Error saving favorites: {}", e);
        }
    }
}

async fn read_persisted(kv: &dyn KeyValueStore) -> Vec<FavoriteEntry> {
    match kv.get(FAVORITES_KEY).await {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::error!("Error decoding favorites: {}", e);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::error!("Error loading favorites: {}", e);
            Vec::new()
        }
    }
}
