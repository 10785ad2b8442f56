use std::sync::Arc;

use surveyforge_store::TemplateStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store shares its arena, config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory template store.
    pub store: TemplateStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
