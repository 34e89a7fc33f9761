//! Handlers for business calendar lookups and working-time queries.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use helpdesk_core::business_calendar::BusinessCalendar;
use helpdesk_core::error::CoreError;
use helpdesk_core::time::{whole_minutes, MINUTES_PER_DAY};
use helpdesk_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NextWorkingInstantRequest {
    pub from: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct NextWorkingInstantResponse {
    pub from: Timestamp,
    pub next_working_instant: Timestamp,
    /// Whether `from` itself is inside a working window.
    pub is_working: bool,
}

#[derive(Debug, Deserialize)]
pub struct WorkingMinutesRequest {
    pub from: Timestamp,
    pub to: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct WorkingMinutesResponse {
    pub from: Timestamp,
    pub to: Timestamp,
    pub working_minutes: i64,
}

// ---------------------------------------------------------------------------
// GET /calendars
// ---------------------------------------------------------------------------

/// List all configured calendars, ordered by id.
pub async fn list_calendars(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let calendars: Vec<BusinessCalendar> = state.calendars.list().cloned().collect();
    Ok(Json(DataResponse { data: calendars }))
}

// ---------------------------------------------------------------------------
// GET /calendars/{id}
// ---------------------------------------------------------------------------

pub async fn get_calendar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let calendar = state.calendars.get(&id)?.clone();
    Ok(Json(DataResponse { data: calendar }))
}

// ---------------------------------------------------------------------------
// POST /calendars/{id}/next-working-instant
// ---------------------------------------------------------------------------

pub async fn next_working_instant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NextWorkingInstantRequest>,
) -> AppResult<impl IntoResponse> {
    let calendar = state.calendars.get(&id)?;
    let next = calendar.next_working_instant(body.from);

    Ok(Json(DataResponse {
        data: NextWorkingInstantResponse {
            from: body.from,
            next_working_instant: next,
            is_working: calendar.is_working_instant(body.from),
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /calendars/{id}/working-minutes
// ---------------------------------------------------------------------------

/// Working minutes between two instants. A reversed range yields zero;
/// ranges wider than the configured span are rejected.
pub async fn working_minutes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<WorkingMinutesRequest>,
) -> AppResult<impl IntoResponse> {
    let calendar = state.calendars.get(&id)?;

    let max_days = state.config.max_working_span_days;
    if whole_minutes(body.from, body.to) > max_days.saturating_mul(MINUTES_PER_DAY) {
        return Err(CoreError::Validation(format!(
            "Range from {} to {} exceeds the maximum span of {max_days} days",
            body.from, body.to
        ))
        .into());
    }

    let working_minutes = calendar.working_minutes_between(body.from, body.to);

    Ok(Json(DataResponse {
        data: WorkingMinutesResponse {
            from: body.from,
            to: body.to,
            working_minutes,
        },
    }))
}
