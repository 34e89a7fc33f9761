//! Route definitions for the `/calendars` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::calendars;
use crate::state::AppState;

/// Routes mounted at `/calendars`.
///
/// ```text
/// GET    /                            -> list calendars
/// GET    /{id}                        -> get calendar
/// POST   /{id}/next-working-instant   -> next working instant
/// POST   /{id}/working-minutes        -> working minutes between two instants
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(calendars::list_calendars))
        .route("/{id}", get(calendars::get_calendar))
        .route(
            "/{id}/next-working-instant",
            post(calendars::next_working_instant),
        )
        .route("/{id}/working-minutes", post(calendars::working_minutes))
}
