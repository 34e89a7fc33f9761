//! SLA levels and the ticket-to-target adapter.
//!
//! An [`SlaLevel`] is the administrator-configured budget pair (first
//! response, resolution). The adapter turns a ticket record from storage
//! into one [`SlaTarget`] per milestone and evaluates both against the same
//! `now`. [`summarize`] aggregates tiers for dashboard widgets.

use serde::{Deserialize, Serialize};

use crate::business_calendar::BusinessCalendar;
use crate::error::CoreError;
use crate::sla::{compute_progress, validate_duration_minutes, SlaProgress, SlaTarget, SlaTier};
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Milestones
// ---------------------------------------------------------------------------

/// The two clocks tracked per ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaMilestone {
    FirstResponse,
    Resolution,
}

impl SlaMilestone {
    /// Status text shown once the milestone is reached, in place of the
    /// tier label.
    pub fn completed_label(self) -> &'static str {
        match self {
            Self::FirstResponse => "✓ responded",
            Self::Resolution => "✓ resolved",
        }
    }
}

// ---------------------------------------------------------------------------
// SLA level
// ---------------------------------------------------------------------------

/// An SLA level as configured by administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaLevel {
    pub id: EntityId,
    pub name: String,
    pub first_response_minutes: i64,
    pub resolution_minutes: i64,
    /// Business calendar the budgets are measured against; `None` means
    /// wall-clock time.
    #[serde(default)]
    pub calendar_id: Option<EntityId>,
}

impl SlaLevel {
    /// Build a level, rejecting non-positive budgets.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        first_response_minutes: i64,
        resolution_minutes: i64,
        calendar_id: Option<EntityId>,
    ) -> Result<Self, CoreError> {
        let level = Self {
            id: id.into(),
            name: name.into(),
            first_response_minutes,
            resolution_minutes,
            calendar_id,
        };
        level.validate()?;
        Ok(level)
    }

    /// Re-check invariants on a level that arrived through deserialization.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "SLA level name must not be empty".to_string(),
            ));
        }
        validate_duration_minutes(self.first_response_minutes, "First response time")?;
        validate_duration_minutes(self.resolution_minutes, "Resolution time")?;
        Ok(())
    }

    /// Budget for the given milestone.
    pub fn minutes_for(&self, milestone: SlaMilestone) -> i64 {
        match milestone {
            SlaMilestone::FirstResponse => self.first_response_minutes,
            SlaMilestone::Resolution => self.resolution_minutes,
        }
    }
}

// ---------------------------------------------------------------------------
// Ticket adapter
// ---------------------------------------------------------------------------

/// The ticket fields the SLA engine needs, as supplied by storage.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketSlaInput {
    #[serde(default)]
    pub ticket_id: Option<EntityId>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub first_responded_at: Option<Timestamp>,
    #[serde(default)]
    pub closed_at: Option<Timestamp>,
}

impl TicketSlaInput {
    /// When the given milestone was reached, if it has been.
    pub fn completed_at(&self, milestone: SlaMilestone) -> Option<Timestamp> {
        match milestone {
            SlaMilestone::FirstResponse => self.first_responded_at,
            SlaMilestone::Resolution => self.closed_at,
        }
    }
}

/// SLA progress for both milestones of one ticket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketSla {
    pub ticket_id: Option<EntityId>,
    pub first_response: SlaProgress,
    pub resolution: SlaProgress,
}

/// Build the target for one milestone, anchored at ticket creation.
pub fn ticket_target<'a>(
    level: &SlaLevel,
    calendar: Option<&'a BusinessCalendar>,
    ticket: &TicketSlaInput,
    milestone: SlaMilestone,
) -> Result<SlaTarget<'a>, CoreError> {
    let target = SlaTarget::new(ticket.created_at, level.minutes_for(milestone), calendar)?;
    Ok(target.with_completion(ticket.completed_at(milestone)))
}

/// Build both milestone targets for a ticket.
pub fn ticket_targets<'a>(
    level: &SlaLevel,
    calendar: Option<&'a BusinessCalendar>,
    ticket: &TicketSlaInput,
) -> Result<(SlaTarget<'a>, SlaTarget<'a>), CoreError> {
    Ok((
        ticket_target(level, calendar, ticket, SlaMilestone::FirstResponse)?,
        ticket_target(level, calendar, ticket, SlaMilestone::Resolution)?,
    ))
}

/// Evaluate both milestones of `ticket` as of `now`.
pub fn evaluate_ticket(
    level: &SlaLevel,
    calendar: Option<&BusinessCalendar>,
    ticket: &TicketSlaInput,
    now: Timestamp,
) -> Result<TicketSla, CoreError> {
    let (first_response, resolution) = ticket_targets(level, calendar, ticket)?;
    Ok(TicketSla {
        ticket_id: ticket.ticket_id.clone(),
        first_response: milestone_progress(&first_response, SlaMilestone::FirstResponse, now),
        resolution: milestone_progress(&resolution, SlaMilestone::Resolution, now),
    })
}

fn milestone_progress(target: &SlaTarget<'_>, milestone: SlaMilestone, now: Timestamp) -> SlaProgress {
    let mut progress = compute_progress(target, now);
    if progress.completed {
        progress.status_label = milestone.completed_label().to_string();
    }
    progress
}

// ---------------------------------------------------------------------------
// Dashboard summary
// ---------------------------------------------------------------------------

/// Tier counts across a set of SLA clocks. Completed clocks are counted
/// separately and do not contribute to the tier buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlaSummary {
    pub ok: u32,
    pub warning: u32,
    pub critical: u32,
    pub overdue: u32,
    pub completed: u32,
}

impl SlaSummary {
    /// Number of clocks still running.
    pub fn open(&self) -> u32 {
        self.ok + self.warning + self.critical + self.overdue
    }
}

/// Count progress entries by tier.
pub fn summarize<'p>(progress: impl IntoIterator<Item = &'p SlaProgress>) -> SlaSummary {
    let mut summary = SlaSummary::default();
    for p in progress {
        if p.completed {
            summary.completed += 1;
            continue;
        }
        match p.tier {
            SlaTier::Ok => summary.ok += 1,
            SlaTier::Warning => summary.warning += 1,
            SlaTier::Critical => summary.critical += 1,
            SlaTier::Overdue => summary.overdue += 1,
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
