//! Handlers for SLA deadline, progress and ticket batch evaluation.
//!
//! `now` is taken from the request when supplied; otherwise it is sampled
//! once at the top of the handler and reused for every computation in the
//! request.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use helpdesk_core::sla::{self, SlaTarget};
use helpdesk_core::sla_policy::{self, SlaLevel, SlaSummary, TicketSla, TicketSlaInput};
use helpdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DeadlineRequest {
    pub anchor: Timestamp,
    pub duration_minutes: i64,
    #[serde(default)]
    pub calendar_id: Option<EntityId>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub anchor: Timestamp,
    pub duration_minutes: i64,
    #[serde(default)]
    pub calendar_id: Option<EntityId>,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    #[serde(default)]
    pub now: Option<Timestamp>,
}

#[derive(Debug, Deserialize)]
pub struct TicketsRequest {
    pub level: SlaLevel,
    pub tickets: Vec<TicketSlaInput>,
    #[serde(default)]
    pub now: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct TicketsResponse {
    pub now: Timestamp,
    pub tickets: Vec<TicketSla>,
    pub first_response_summary: SlaSummary,
    pub resolution_summary: SlaSummary,
}

// ---------------------------------------------------------------------------
// POST /sla/deadline
// ---------------------------------------------------------------------------

/// Compute the deadline for an anchor and budget.
pub async fn compute_deadline(
    State(state): State<AppState>,
    Json(body): Json<DeadlineRequest>,
) -> AppResult<impl IntoResponse> {
    let calendar = state.calendars.resolve(body.calendar_id.as_deref())?;
    let target = SlaTarget::new(body.anchor, body.duration_minutes, calendar)?;
    let outcome = sla::compute_deadline_checked(&target);

    if !outcome.reachable {
        tracing::warn!(
            calendar_id = ?body.calendar_id,
            anchor = %body.anchor,
            "Deadline not reachable within the calendar walk bound",
        );
    }

    Ok(Json(DataResponse { data: outcome }))
}

// ---------------------------------------------------------------------------
// POST /sla/progress
// ---------------------------------------------------------------------------

/// Compute progress, tier and labels for a single target.
pub async fn compute_progress(
    State(state): State<AppState>,
    Json(body): Json<ProgressRequest>,
) -> AppResult<impl IntoResponse> {
    let now = body.now.unwrap_or_else(Utc::now);
    let calendar = state.calendars.resolve(body.calendar_id.as_deref())?;
    let target = SlaTarget::new(body.anchor, body.duration_minutes, calendar)?
        .with_completion(body.completed_at);

    let progress = sla::compute_progress(&target, now);
    Ok(Json(DataResponse { data: progress }))
}

// ---------------------------------------------------------------------------
// POST /sla/tickets
// ---------------------------------------------------------------------------

/// Evaluate first-response and resolution clocks for a batch of tickets
/// under one SLA level, with per-milestone tier summaries.
pub async fn evaluate_tickets(
    State(state): State<AppState>,
    Json(body): Json<TicketsRequest>,
) -> AppResult<impl IntoResponse> {
    let now = body.now.unwrap_or_else(Utc::now);

    let max = state.config.max_tickets_per_request;
    if body.tickets.len() > max {
        return Err(AppError::BadRequest(format!(
            "At most {max} tickets may be evaluated per request, got {}",
            body.tickets.len()
        )));
    }

    body.level.validate()?;
    let calendar = state.calendars.resolve(body.level.calendar_id.as_deref())?;
    if calendar.is_some_and(|c| !c.has_working_time()) {
        tracing::warn!(
            level_id = %body.level.id,
            calendar_id = ?body.level.calendar_id,
            "SLA level uses a calendar with no working time",
        );
    }

    let tickets = body
        .tickets
        .iter()
        .map(|t| sla_policy::evaluate_ticket(&body.level, calendar, t, now))
        .collect::<Result<Vec<_>, _>>()?;

    let first_response_summary = sla_policy::summarize(tickets.iter().map(|t| &t.first_response));
    let resolution_summary = sla_policy::summarize(tickets.iter().map(|t| &t.resolution));

    tracing::debug!(
        level_id = %body.level.id,
        tickets = tickets.len(),
        overdue = resolution_summary.overdue,
        "Evaluated ticket SLAs",
    );

    Ok(Json(DataResponse {
        data: TicketsResponse {
            now,
            tickets,
            first_response_summary,
            resolution_summary,
        },
    }))
}
