use std::sync::Arc;

use prepdeck_ai::GeminiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: prepdeck_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Generative-language API client.
    pub ai: Arc<GeminiClient>,
}
