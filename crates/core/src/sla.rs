//! SLA clock: deadline walking, progress and tier classification.
//!
//! Pure functions of an [`SlaTarget`] plus an explicit `now`. Nothing here
//! reads the system clock, so a single progress computation is internally
//! consistent and fully deterministic under test.

use serde::{Deserialize, Serialize};

use crate::business_calendar::{BusinessCalendar, MAX_SCAN_DAYS};
use crate::error::CoreError;
use crate::time::{add_minutes, start_of_next_day, whole_minutes, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Tier thresholds
// ---------------------------------------------------------------------------

/// Percent elapsed at or above which a target is overdue.
pub const OVERDUE_PERCENT: f64 = 100.0;
/// Percent elapsed at or above which a target is critical (below overdue).
pub const CRITICAL_PERCENT: f64 = 85.0;
/// Percent elapsed at or above which a target is in warning (below critical).
pub const WARNING_PERCENT: f64 = 70.0;

/// Maximum number of midnights the deadline walk crosses before giving up.
pub const MAX_WALK_DAYS: i64 = MAX_SCAN_DAYS;

/// Largest accepted SLA budget: one leap year of minutes.
pub const MAX_SLA_DURATION_MINUTES: i64 = 366 * MINUTES_PER_DAY;

/// Remaining label once the tracked milestone has been reached.
pub const COMPLETED_LABEL: &str = "completed";
/// Remaining label once the deadline has passed.
pub const OVERDUE_LABEL: &str = "overdue";
/// Status label for a completed target with no more specific milestone.
pub const COMPLETED_STATUS_LABEL: &str = "✓ completed";

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Discrete SLA status derived from percent elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlaTier {
    Ok,
    Warning,
    Critical,
    Overdue,
}

impl SlaTier {
    /// Classify a percentage. Thresholds are inclusive on the higher tier
    /// and checked from the top down.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= OVERDUE_PERCENT {
            Self::Overdue
        } else if percent >= CRITICAL_PERCENT {
            Self::Critical
        } else if percent >= WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    /// Human-readable label for badges and alerts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "On track",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
            Self::Overdue => "Overdue",
        }
    }
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// One tracked SLA milestone: a clock anchored at `anchor` with a budget of
/// `duration_minutes`, optionally walked through a business calendar.
#[derive(Debug, Clone)]
pub struct SlaTarget<'a> {
    anchor: Timestamp,
    duration_minutes: i64,
    calendar: Option<&'a BusinessCalendar>,
    completed_at: Option<Timestamp>,
}

impl<'a> SlaTarget<'a> {
    /// Build a target. A non-positive budget is a configuration error.
    pub fn new(
        anchor: Timestamp,
        duration_minutes: i64,
        calendar: Option<&'a BusinessCalendar>,
    ) -> Result<Self, CoreError> {
        validate_duration_minutes(duration_minutes, "SLA duration")?;
        Ok(Self {
            anchor,
            duration_minutes,
            calendar,
            completed_at: None,
        })
    }

    /// Mark the milestone as reached at `completed_at`.
    pub fn with_completion(mut self, completed_at: Option<Timestamp>) -> Self {
        self.completed_at = completed_at;
        self
    }

    pub fn anchor(&self) -> Timestamp {
        self.anchor
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    pub fn calendar(&self) -> Option<&'a BusinessCalendar> {
        self.calendar
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }
}

/// Reject minute budgets outside `1..=MAX_SLA_DURATION_MINUTES`, naming the
/// offending field.
pub fn validate_duration_minutes(minutes: i64, name: &str) -> Result<(), CoreError> {
    if minutes <= 0 {
        return Err(CoreError::Validation(format!(
            "{name} must be a positive number of minutes, got {minutes}"
        )));
    }
    if minutes > MAX_SLA_DURATION_MINUTES {
        return Err(CoreError::Validation(format!(
            "{name} must be at most {MAX_SLA_DURATION_MINUTES} minutes, got {minutes}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Deadline
// ---------------------------------------------------------------------------

/// A computed deadline plus whether the walk found it within the bound.
///
/// `reachable == false` means the calendar had no usable working time within
/// [`MAX_WALK_DAYS`]; `deadline` is then the exhausted walk cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineOutcome {
    pub deadline: Timestamp,
    pub reachable: bool,
}

/// The instant at which `target`'s budget runs out.
pub fn compute_deadline(target: &SlaTarget<'_>) -> Timestamp {
    compute_deadline_checked(target).deadline
}

/// Like [`compute_deadline`], also reporting whether the walk hit its bound.
pub fn compute_deadline_checked(target: &SlaTarget<'_>) -> DeadlineOutcome {
    let calendar = match target.calendar {
        Some(cal) if !cal.is_always_open() => cal,
        _ => {
            return DeadlineOutcome {
                deadline: add_minutes(target.anchor, target.duration_minutes),
                reachable: true,
            }
        }
    };

    let mut remaining = target.duration_minutes;
    let mut cursor = calendar.next_working_instant(target.anchor);
    let mut days_walked = 0;

    loop {
        if let Some((window_start, window_end)) = calendar.window_bounds_on(cursor.date_naive()) {
            let effective_start = cursor.max(window_start);
            if effective_start < window_end {
                let available = whole_minutes(effective_start, window_end);
                if remaining <= available {
                    return DeadlineOutcome {
                        deadline: add_minutes(effective_start, remaining),
                        reachable: true,
                    };
                }
                remaining -= available;
            }
        }

        if days_walked >= MAX_WALK_DAYS {
            tracing::warn!(
                calendar_id = calendar.id(),
                anchor = %target.anchor,
                duration_minutes = target.duration_minutes,
                remaining_minutes = remaining,
                "SLA deadline walk exceeded its day bound, returning best-effort deadline",
            );
            return DeadlineOutcome {
                deadline: cursor,
                reachable: false,
            };
        }

        cursor = start_of_next_day(cursor);
        days_walked += 1;
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Derived SLA state for display. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaProgress {
    pub deadline: Timestamp,
    /// `false` when the deadline is a best-effort value from a calendar with
    /// no reachable working time.
    pub deadline_reachable: bool,
    /// Percent of the wall-clock span from anchor to deadline that has
    /// elapsed, in `[0, 100]` with one decimal place.
    pub percent_elapsed: f64,
    pub tier: SlaTier,
    /// The milestone was reached. Progress is frozen at completion time and
    /// `tier` reflects that frozen value.
    pub completed: bool,
    pub remaining_label: String,
    /// User-facing status text: the tier label, or a completion label.
    pub status_label: String,
}

/// Compute deadline, percent elapsed, tier and labels as of `now`.
pub fn compute_progress(target: &SlaTarget<'_>, now: Timestamp) -> SlaProgress {
    let outcome = compute_deadline_checked(target);
    let deadline = outcome.deadline;
    let reference = target.completed_at.unwrap_or(now);
    let percent = percent_elapsed(target.anchor, deadline, reference);
    let tier = SlaTier::from_percent(percent);
    let completed = target.completed_at.is_some();

    let remaining_label = if completed {
        COMPLETED_LABEL.to_string()
    } else if now >= deadline {
        OVERDUE_LABEL.to_string()
    } else {
        format_remaining(whole_minutes(now, deadline))
    };

    let status_label = if completed {
        COMPLETED_STATUS_LABEL.to_string()
    } else {
        tier.label().to_string()
    };

    SlaProgress {
        deadline,
        deadline_reachable: outcome.reachable,
        percent_elapsed: percent,
        tier,
        completed,
        remaining_label,
        status_label,
    }
}

/// Percent of `[anchor, deadline]` covered by `[anchor, reference]`.
///
/// Returns 100 for an empty or inverted span. A reference before the anchor
/// counts as zero elapsed.
pub fn percent_elapsed(anchor: Timestamp, deadline: Timestamp, reference: Timestamp) -> f64 {
    let total = whole_minutes(anchor, deadline);
    if total <= 0 {
        return OVERDUE_PERCENT;
    }
    let elapsed = whole_minutes(anchor, reference).max(0);
    let tenths = (elapsed as f64 * 1000.0 / total as f64).round();
    (tenths / 10.0).clamp(0.0, 100.0)
}

/// Format a positive number of remaining minutes.
///
/// `"2d 3h"` from a day upwards, `"4h 15m"` from an hour, `"42m"` below.
pub fn format_remaining(minutes: i64) -> String {
    let minutes = minutes.max(0);
    if minutes >= MINUTES_PER_DAY {
        let days = minutes / MINUTES_PER_DAY;
        let hours = (minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
        format!("{days}d {hours}h")
    } else if minutes >= MINUTES_PER_HOUR {
        let hours = minutes / MINUTES_PER_HOUR;
        let mins = minutes % MINUTES_PER_HOUR;
        format!("{hours}h {mins}m")
    } else {
        format!("{minutes}m")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
