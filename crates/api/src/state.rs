use std::sync::Arc;

use crate::calendars::CalendarRegistry;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; both fields are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Business calendars loaded at startup.
    pub calendars: Arc<CalendarRegistry>,
}
