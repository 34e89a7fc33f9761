//! Business-hours calendars and working-time queries.
//!
//! A [`BusinessCalendar`] is a named weekly schedule: either open around the
//! clock, or one contiguous [`WorkingWindow`] per weekday (or none, for a
//! closed day). Windows are wall-clock times on the UTC calendar day.
//!
//! The calendar answers two questions without reference to any ticket:
//! where the next working instant is, and how many working minutes lie
//! between two instants.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;
use crate::time::{
    add_minutes, at_time_of_day, start_of_day, start_of_next_day, whole_minutes, MINUTES_PER_WEEK,
};
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of calendar days scanned forward before giving up on finding a
/// working window. Two full weeks always covers a recurring weekly window.
pub const MAX_SCAN_DAYS: i64 = 14;

/// Weekdays in schedule order (index = `Weekday::num_days_from_monday`).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Monday through Friday.
pub const WORKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Wall-clock format accepted for window boundaries in configuration.
const TIME_OF_DAY_FORMAT: &str = "%H:%M";

// ---------------------------------------------------------------------------
// Working window
// ---------------------------------------------------------------------------

/// A single contiguous working window within one day, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingWindow {
    #[serde(serialize_with = "serialize_time_of_day")]
    start: NaiveTime,
    #[serde(serialize_with = "serialize_time_of_day")]
    end: NaiveTime,
}

impl WorkingWindow {
    /// Build a window, rejecting empty or inverted ranges.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, CoreError> {
        if start >= end {
            return Err(CoreError::Validation(format!(
                "Working window start ({}) must be before end ({})",
                start.format(TIME_OF_DAY_FORMAT),
                end.format(TIME_OF_DAY_FORMAT),
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a window from hour/minute pairs.
    pub fn from_hm(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<Self, CoreError> {
        let start = hm(start_hour, start_minute)?;
        let end = hm(end_hour, end_minute)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the window in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

fn hm(hour: u32, minute: u32) -> Result<NaiveTime, CoreError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        CoreError::Validation(format!("Invalid time of day {hour:02}:{minute:02}"))
    })
}

fn serialize_time_of_day<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&time.format(TIME_OF_DAY_FORMAT))
}

/// Weekly schedule: one optional window per weekday, Monday first.
pub type WeeklyWindows = [Option<WorkingWindow>; 7];

/// Build a schedule with the same window on each of `days` and every other
/// day closed.
pub fn uniform_week(days: &[Weekday], window: WorkingWindow) -> WeeklyWindows {
    let mut windows: WeeklyWindows = [None; 7];
    for day in days {
        windows[day.num_days_from_monday() as usize] = Some(window);
    }
    windows
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// A named business-hours calendar. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessCalendar {
    id: EntityId,
    name: String,
    always_open: bool,
    #[serde(serialize_with = "serialize_weekly_windows")]
    weekly_windows: WeeklyWindows,
}

impl BusinessCalendar {
    /// Build a calendar that follows `weekly_windows`.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        weekly_windows: WeeklyWindows,
    ) -> Result<Self, CoreError> {
        Self::build(id.into(), name.into(), false, weekly_windows)
    }

    /// Build a 24x7 calendar: every instant is working time.
    pub fn always_open(id: impl Into<EntityId>, name: impl Into<String>) -> Result<Self, CoreError> {
        Self::build(id.into(), name.into(), true, [None; 7])
    }

    fn build(
        id: EntityId,
        name: String,
        always_open: bool,
        weekly_windows: WeeklyWindows,
    ) -> Result<Self, CoreError> {
        if id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Calendar id must not be empty".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Calendar '{id}' must have a name"
            )));
        }
        Ok(Self {
            id,
            name,
            always_open,
            weekly_windows,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_always_open(&self) -> bool {
        self.always_open
    }

    /// The configured window for `weekday`, if the day is a working day.
    ///
    /// Not consulted for always-open calendars.
    pub fn window_on(&self, weekday: Weekday) -> Option<WorkingWindow> {
        self.weekly_windows[weekday.num_days_from_monday() as usize]
    }

    /// The window for `date` as absolute `(start, end)` instants.
    pub fn window_bounds_on(&self, date: NaiveDate) -> Option<(Timestamp, Timestamp)> {
        self.window_on(date.weekday()).map(|w| {
            (
                at_time_of_day(date, w.start()),
                at_time_of_day(date, w.end()),
            )
        })
    }

    /// Whether the calendar has any reachable working time at all.
    ///
    /// A closed calendar (no windows, not always open) never yields a real
    /// deadline; callers can check this up front and warn.
    pub fn has_working_time(&self) -> bool {
        self.always_open || self.weekly_windows.iter().any(Option::is_some)
    }

    /// Whether `instant` falls inside a working window (end exclusive).
    pub fn is_working_instant(&self, instant: Timestamp) -> bool {
        if self.always_open {
            return true;
        }
        match self.window_bounds_on(instant.date_naive()) {
            Some((start, end)) => start <= instant && instant < end,
            None => false,
        }
    }

    /// The first instant at or after `from` that lies inside a working window.
    ///
    /// On `from`'s own day the result is `max(from, window start)` provided
    /// `from` is not past the window end. Later days snap to their window
    /// start. If no window turns up within [`MAX_SCAN_DAYS`] days, `from` is
    /// returned unchanged.
    pub fn next_working_instant(&self, from: Timestamp) -> Timestamp {
        if self.always_open {
            return from;
        }

        let from_date = from.date_naive();
        if let Some((start, end)) = self.window_bounds_on(from_date) {
            if from <= end {
                return from.max(start);
            }
        }

        for offset in 1..MAX_SCAN_DAYS {
            let Some(date) = from_date.checked_add_days(chrono::Days::new(offset as u64)) else {
                break;
            };
            if let Some((start, _)) = self.window_bounds_on(date) {
                return start;
            }
        }

        tracing::debug!(
            calendar_id = %self.id,
            %from,
            "No working window within scan bound",
        );
        from
    }

    /// Total working minutes in one week of windows.
    pub fn weekly_working_minutes(&self) -> i64 {
        if self.always_open {
            return MINUTES_PER_WEEK;
        }
        self.weekly_windows
            .iter()
            .flatten()
            .map(WorkingWindow::duration_minutes)
            .sum()
    }

    /// Working minutes between `from` and `to`, never negative.
    ///
    /// Always-open calendars use plain wall-clock minutes. Otherwise each
    /// day contributes the overlap of `[from, to]` with its window; runs of
    /// whole weeks are added in one step.
    pub fn working_minutes_between(&self, from: Timestamp, to: Timestamp) -> i64 {
        if self.always_open {
            return whole_minutes(from, to).max(0);
        }

        let weekly = self.weekly_working_minutes();
        let mut total = 0;
        let mut cursor = self.next_working_instant(from);
        while cursor < to {
            // From a midnight, every whole week before `to` adds the same sum.
            if cursor == start_of_day(cursor) {
                let full_weeks = whole_minutes(cursor, to) / MINUTES_PER_WEEK;
                if full_weeks > 0 {
                    total += full_weeks * weekly;
                    cursor = add_minutes(cursor, full_weeks * MINUTES_PER_WEEK);
                    continue;
                }
            }
            if let Some((start, end)) = self.window_bounds_on(cursor.date_naive()) {
                let overlap_start = cursor.max(start);
                let overlap_end = to.min(end);
                if overlap_start < overlap_end {
                    total += whole_minutes(overlap_start, overlap_end);
                }
            }
            cursor = start_of_next_day(cursor);
        }
        total
    }
}

fn serialize_weekly_windows<S: Serializer>(
    windows: &WeeklyWindows,
    s: S,
) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(WEEKDAYS.len()))?;
    for day in WEEKDAYS {
        map.serialize_entry(
            weekday_key(day),
            &windows[day.num_days_from_monday() as usize],
        )?;
    }
    map.end()
}

/// Lowercase English day name used as the configuration key.
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

// ---------------------------------------------------------------------------
// Configuration input
// ---------------------------------------------------------------------------

/// A working window as written in configuration (`"HH:MM"` strings).
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingWindowInput {
    pub start: String,
    pub end: String,
}

/// A calendar as loaded from configuration storage.
///
/// Day keys are English weekday names or three-letter abbreviations, in any
/// case. Missing days and `null` values are closed.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessCalendarInput {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub always_open: bool,
    #[serde(default)]
    pub weekly_windows: HashMap<String, Option<WorkingWindowInput>>,
}

impl BusinessCalendarInput {
    /// Validate and convert into a [`BusinessCalendar`].
    pub fn into_calendar(self) -> Result<BusinessCalendar, CoreError> {
        let mut windows: WeeklyWindows = [None; 7];
        let mut seen = [false; 7];

        for (key, window) in &self.weekly_windows {
            let day = parse_weekday(key)?;
            let slot = day.num_days_from_monday() as usize;
            if seen[slot] {
                return Err(CoreError::Validation(format!(
                    "Calendar '{}' lists {} more than once",
                    self.id,
                    weekday_key(day),
                )));
            }
            seen[slot] = true;

            if let Some(w) = window {
                let start = parse_time_of_day(&w.start)?;
                let end = parse_time_of_day(&w.end)?;
                windows[slot] = Some(WorkingWindow::new(start, end).map_err(|e| match e {
                    CoreError::Validation(msg) => CoreError::Validation(format!(
                        "Calendar '{}', {}: {msg}",
                        self.id,
                        weekday_key(day),
                    )),
                    other => other,
                })?);
            }
        }

        BusinessCalendar::build(self.id, self.name, self.always_open, windows)
    }
}

/// Parse a weekday name (`"monday"`, `"Mon"`, ...).
pub fn parse_weekday(value: &str) -> Result<Weekday, CoreError> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| CoreError::Validation(format!("Unknown weekday '{value}'")))
}

/// Parse a `"HH:MM"` wall-clock time.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, CoreError> {
    NaiveTime::parse_from_str(value.trim(), TIME_OF_DAY_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "Invalid time of day '{value}', expected HH:MM"
        ))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Duration;

    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    /// Mon-Fri 08:00-18:00.
    fn office_hours() -> BusinessCalendar {
        let window = WorkingWindow::from_hm(8, 0, 18, 0).unwrap();
        BusinessCalendar::new("office", "Office hours", uniform_week(&WORKDAYS, window)).unwrap()
    }

    fn closed() -> BusinessCalendar {
        BusinessCalendar::new("closed", "Closed", [None; 7]).unwrap()
    }

    fn always_open() -> BusinessCalendar {
        BusinessCalendar::always_open("24x7", "Always open").unwrap()
    }

    // 2025-01-06 is a Monday; 2025-01-10 a Friday.

    // -- construction --

    #[test]
    fn window_rejects_inverted_range() {
        assert_matches!(
            WorkingWindow::from_hm(18, 0, 8, 0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn window_rejects_empty_range() {
        assert_matches!(
            WorkingWindow::from_hm(9, 0, 9, 0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn window_rejects_out_of_range_hour() {
        assert_matches!(
            WorkingWindow::from_hm(8, 0, 25, 0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn window_duration() {
        let w = WorkingWindow::from_hm(8, 30, 17, 0).unwrap();
        assert_eq!(w.duration_minutes(), 510);
    }

    #[test]
    fn calendar_rejects_blank_id() {
        assert_matches!(
            BusinessCalendar::new("  ", "Name", [None; 7]),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn has_working_time() {
        assert!(office_hours().has_working_time());
        assert!(always_open().has_working_time());
        assert!(!closed().has_working_time());
    }

    // -- next_working_instant --

    #[test]
    fn always_open_returns_input() {
        let t = ts("2025-01-11T03:17:00Z");
        assert_eq!(always_open().next_working_instant(t), t);
    }

    #[test]
    fn before_window_snaps_to_start() {
        assert_eq!(
            office_hours().next_working_instant(ts("2025-01-06T06:45:00Z")),
            ts("2025-01-06T08:00:00Z")
        );
    }

    #[test]
    fn inside_window_is_unchanged() {
        let t = ts("2025-01-06T12:34:00Z");
        assert_eq!(office_hours().next_working_instant(t), t);
    }

    #[test]
    fn exactly_at_window_end_is_unchanged() {
        let t = ts("2025-01-06T18:00:00Z");
        assert_eq!(office_hours().next_working_instant(t), t);
    }

    #[test]
    fn after_window_moves_to_next_day_start() {
        assert_eq!(
            office_hours().next_working_instant(ts("2025-01-06T19:00:00Z")),
            ts("2025-01-07T08:00:00Z")
        );
    }

    #[test]
    fn friday_evening_moves_to_monday() {
        assert_eq!(
            office_hours().next_working_instant(ts("2025-01-10T18:30:00Z")),
            ts("2025-01-13T08:00:00Z")
        );
    }

    #[test]
    fn weekend_moves_to_monday() {
        assert_eq!(
            office_hours().next_working_instant(ts("2025-01-11T10:00:00Z")),
            ts("2025-01-13T08:00:00Z")
        );
    }

    #[test]
    fn closed_calendar_returns_input() {
        let t = ts("2025-01-06T10:00:00Z");
        assert_eq!(closed().next_working_instant(t), t);
    }

    #[test]
    fn single_weekly_window_is_found_across_the_week() {
        let window = WorkingWindow::from_hm(10, 0, 12, 0).unwrap();
        let cal =
            BusinessCalendar::new("sun", "Sunday only", uniform_week(&[Weekday::Sun], window))
                .unwrap();
        // Monday after a Sunday window: six days ahead.
        assert_eq!(
            cal.next_working_instant(ts("2025-01-06T00:00:00Z")),
            ts("2025-01-12T10:00:00Z")
        );
    }

    #[test]
    fn next_working_instant_is_idempotent() {
        let cals = [office_hours(), closed(), always_open()];
        let mut t = ts("2025-01-06T00:00:00Z");
        let end = ts("2025-01-14T00:00:00Z");
        while t < end {
            for cal in &cals {
                let once = cal.next_working_instant(t);
                assert_eq!(cal.next_working_instant(once), once, "{} at {t}", cal.id());
            }
            t += Duration::minutes(37);
        }
    }

    #[test]
    fn is_working_instant_excludes_window_end() {
        let cal = office_hours();
        assert!(cal.is_working_instant(ts("2025-01-06T08:00:00Z")));
        assert!(cal.is_working_instant(ts("2025-01-06T17:59:00Z")));
        assert!(!cal.is_working_instant(ts("2025-01-06T18:00:00Z")));
        assert!(!cal.is_working_instant(ts("2025-01-11T12:00:00Z")));
    }

    // -- working_minutes_between --

    #[test]
    fn always_open_counts_wall_clock_minutes() {
        assert_eq!(
            always_open()
                .working_minutes_between(ts("2025-01-06T10:00:00Z"), ts("2025-01-07T10:30:00Z")),
            24 * 60 + 30
        );
    }

    #[test]
    fn always_open_reversed_range_is_zero() {
        assert_eq!(
            always_open()
                .working_minutes_between(ts("2025-01-06T10:00:00Z"), ts("2025-01-06T09:00:00Z")),
            0
        );
    }

    #[test]
    fn same_day_inside_window() {
        assert_eq!(
            office_hours()
                .working_minutes_between(ts("2025-01-06T09:00:00Z"), ts("2025-01-06T11:15:00Z")),
            135
        );
    }

    #[test]
    fn clips_to_window_edges() {
        assert_eq!(
            office_hours()
                .working_minutes_between(ts("2025-01-06T06:00:00Z"), ts("2025-01-06T20:00:00Z")),
            600
        );
    }

    #[test]
    fn spans_weekend() {
        // Friday 16:00 -> Monday 10:00 = 2h + 2h.
        assert_eq!(
            office_hours()
                .working_minutes_between(ts("2025-01-10T16:00:00Z"), ts("2025-01-13T10:00:00Z")),
            240
        );
    }

    #[test]
    fn full_week() {
        assert_eq!(
            office_hours()
                .working_minutes_between(ts("2025-01-06T00:00:00Z"), ts("2025-01-13T00:00:00Z")),
            5 * 600
        );
    }

    #[test]
    fn reversed_range_is_zero() {
        assert_eq!(
            office_hours()
                .working_minutes_between(ts("2025-01-07T10:00:00Z"), ts("2025-01-06T10:00:00Z")),
            0
        );
    }

    #[test]
    fn closed_calendar_has_no_working_minutes() {
        assert_eq!(
            closed().working_minutes_between(ts("2025-01-06T00:00:00Z"), ts("2025-02-06T00:00:00Z")),
            0
        );
    }

    #[test]
    fn working_minutes_never_exceed_wall_clock() {
        let cal = office_hours();
        let base = ts("2025-01-06T05:00:00Z");
        for start_step in 0..40 {
            let from = base + Duration::minutes(start_step * 97);
            for span_step in 0..40 {
                let to = from + Duration::minutes(span_step * 113);
                let working = cal.working_minutes_between(from, to);
                assert!(working >= 0);
                assert!(working <= whole_minutes(from, to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn weekly_working_minutes_sums_windows() {
        assert_eq!(office_hours().weekly_working_minutes(), 5 * 600);
        assert_eq!(closed().weekly_working_minutes(), 0);
        assert_eq!(always_open().weekly_working_minutes(), 7 * 24 * 60);
    }

    /// Day-by-day overlap sum, without whole-week skipping.
    fn working_minutes_by_day(cal: &BusinessCalendar, from: Timestamp, to: Timestamp) -> i64 {
        let mut total = 0;
        let mut cursor = from;
        while cursor < to {
            if let Some((start, end)) = cal.window_bounds_on(cursor.date_naive()) {
                let overlap_start = cursor.max(start);
                let overlap_end = to.min(end);
                if overlap_start < overlap_end {
                    total += whole_minutes(overlap_start, overlap_end);
                }
            }
            cursor = start_of_next_day(cursor);
        }
        total
    }

    #[test]
    fn multi_week_spans_match_day_by_day_sum() {
        let mut windows = uniform_week(&WORKDAYS, WorkingWindow::from_hm(8, 0, 18, 0).unwrap());
        windows[Weekday::Sat.num_days_from_monday() as usize] =
            Some(WorkingWindow::from_hm(10, 30, 14, 15).unwrap());
        let cal = BusinessCalendar::new("six-day", "Six day", windows).unwrap();
        let base = ts("2025-01-08T07:13:00Z");
        for start_step in 0..12 {
            let from = base + Duration::minutes(start_step * 611);
            for weeks in [1, 2, 5, 9] {
                for extra in [0, 1, 2_000, 6_500] {
                    let to = from + Duration::weeks(weeks) + Duration::minutes(extra);
                    assert_eq!(
                        cal.working_minutes_between(from, to),
                        working_minutes_by_day(&cal, from, to),
                        "{from} -> {to}"
                    );
                }
            }
        }
    }

    #[test]
    fn century_span_counts_whole_weeks() {
        // 2000-01-03 is a Monday; 5218 weeks later is 2100-01-04.
        let from = ts("2000-01-03T00:00:00Z");
        let to = from + Duration::weeks(5218);
        assert_eq!(office_hours().working_minutes_between(from, to), 5218 * 5 * 600);
    }

    #[test]
    fn closed_calendar_over_millennia_is_zero() {
        assert_eq!(
            closed().working_minutes_between(ts("1000-01-01T00:00:00Z"), ts("9999-01-01T00:00:00Z")),
            0
        );
    }

    // -- configuration input --

    fn input(json: serde_json::Value) -> BusinessCalendarInput {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn input_parses_named_days() {
        let cal = input(serde_json::json!({
            "id": "support",
            "name": "Support desk",
            "weekly_windows": {
                "Monday": { "start": "09:00", "end": "17:30" },
                "tue": { "start": "09:00", "end": "17:30" },
                "saturday": null
            }
        }))
        .into_calendar()
        .unwrap();

        assert!(!cal.is_always_open());
        assert_eq!(
            cal.window_on(Weekday::Mon),
            Some(WorkingWindow::from_hm(9, 0, 17, 30).unwrap())
        );
        assert!(cal.window_on(Weekday::Tue).is_some());
        assert_eq!(cal.window_on(Weekday::Wed), None);
        assert_eq!(cal.window_on(Weekday::Sat), None);
    }

    #[test]
    fn input_always_open_defaults_windows() {
        let cal = input(serde_json::json!({
            "id": "24x7",
            "name": "Around the clock",
            "always_open": true
        }))
        .into_calendar()
        .unwrap();
        assert!(cal.is_always_open());
    }

    #[test]
    fn input_rejects_unknown_day() {
        let result = input(serde_json::json!({
            "id": "x",
            "name": "X",
            "weekly_windows": { "funday": { "start": "09:00", "end": "17:00" } }
        }))
        .into_calendar();
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("funday"));
    }

    #[test]
    fn input_rejects_duplicate_day() {
        let result = input(serde_json::json!({
            "id": "x",
            "name": "X",
            "weekly_windows": {
                "mon": { "start": "09:00", "end": "17:00" },
                "monday": { "start": "10:00", "end": "17:00" }
            }
        }))
        .into_calendar();
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn input_rejects_malformed_time() {
        let result = input(serde_json::json!({
            "id": "x",
            "name": "X",
            "weekly_windows": { "monday": { "start": "9am", "end": "17:00" } }
        }))
        .into_calendar();
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("9am"));
    }

    #[test]
    fn input_rejects_inverted_window() {
        let result = input(serde_json::json!({
            "id": "x",
            "name": "X",
            "weekly_windows": { "friday": { "start": "18:00", "end": "08:00" } }
        }))
        .into_calendar();
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("friday"));
    }

    // -- serialization --

    #[test]
    fn serializes_windows_by_day_name() {
        let json = serde_json::to_value(office_hours()).unwrap();
        assert_eq!(json["id"], "office");
        assert_eq!(json["always_open"], false);
        assert_eq!(json["weekly_windows"]["monday"]["start"], "08:00");
        assert_eq!(json["weekly_windows"]["friday"]["end"], "18:00");
        assert!(json["weekly_windows"]["sunday"].is_null());
    }
}
