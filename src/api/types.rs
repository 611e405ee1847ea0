//! Shared types for the API layer.

use std::sync::Arc;

use crate::api::error::ApiError;
use crate::db::SqliteRecordStore;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<SqliteRecordStore>,
}

impl ApiContext {
    pub fn new(store: SqliteRecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Run a store operation on the blocking pool.
    ///
    /// SQLite calls block, so handlers never touch the store on a runtime worker.
    pub async fn with_store<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&SqliteRecordStore) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?
    }
}
