use std::sync::Arc;

use mucize_sync::DataContext;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The synchronization layer. Every read and write goes through it.
    pub data: Arc<DataContext>,
    pub config: Arc<ServerConfig>,
}
