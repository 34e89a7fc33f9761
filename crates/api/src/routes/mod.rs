pub mod calendars;
pub mod health;
pub mod sla;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /calendars                                  list calendars (GET)
/// /calendars/{id}                             get calendar (GET)
/// /calendars/{id}/next-working-instant        snap to working time (POST)
/// /calendars/{id}/working-minutes             working minutes in range (POST)
///
/// /sla/deadline                               compute deadline (POST)
/// /sla/progress                               compute progress (POST)
/// /sla/tickets                                evaluate ticket batch (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/calendars", calendars::router())
        .nest("/sla", sla::router())
}
