use std::sync::Arc;

use petbook_storage::ObjectStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: petbook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object store for uploaded photos. A trait object so tests can
    /// substitute a mock.
    pub storage: Arc<dyn ObjectStorage>,
}
