use std::sync::Arc;

use notes_db::store::NotesStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Note and category storage (PostgreSQL or in-memory).
    pub store: Arc<dyn NotesStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
