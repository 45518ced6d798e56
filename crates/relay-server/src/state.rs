//! Shared application state for the relay server.
//!
//! [`AppState`] owns the [`LatestIdStore`], the only mutable state in the
//! process. It is created once at startup, wrapped in an [`Arc`], and
//! injected into handlers via Axum's `State` extractor.
//!
//! [`Arc`]: std::sync::Arc

use relay_types::Identifier;
use tokio::sync::RwLock;

/// Holds the most recently submitted identifier.
///
/// Every operation takes the lock for the duration of a single clone or
/// assignment, so concurrent callers are serialized: readers observe
/// either the previous value or the new one, and among concurrent writers
/// the last to acquire the lock wins. Replaced values are dropped.
#[derive(Debug, Default)]
pub struct LatestIdStore {
    current: RwLock<Option<Identifier>>,
}

impl LatestIdStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current identifier unconditionally.
    pub async fn set(&self, id: Identifier) {
        *self.current.write().await = Some(id);
    }

    /// Return a copy of the current identifier, or `None` if absent.
    pub async fn get(&self) -> Option<Identifier> {
        self.current.read().await.clone()
    }

    /// Reset the store to absent.
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }
}

/// Shared state for the Axum application.
#[derive(Debug, Default)]
pub struct AppState {
    /// The single relayed identifier.
    pub store: LatestIdStore,
}

impl AppState {
    /// Create application state with an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}
