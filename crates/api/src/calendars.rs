//! In-memory registry of business calendars, built once at startup.

use std::collections::BTreeMap;
use std::path::Path;

use helpdesk_core::business_calendar::{
    uniform_week, BusinessCalendar, BusinessCalendarInput, WorkingWindow, WORKDAYS,
};
use helpdesk_core::error::CoreError;

/// Id of the built-in 24x7 calendar.
pub const ALWAYS_OPEN_CALENDAR_ID: &str = "24x7";
/// Id of the built-in Mon-Fri 08:00-18:00 calendar.
pub const BUSINESS_HOURS_CALENDAR_ID: &str = "business-hours";

/// Calendars keyed by id. Immutable once built, so handlers share it
/// through an `Arc` without locking.
#[derive(Debug, Default)]
pub struct CalendarRegistry {
    calendars: BTreeMap<String, BusinessCalendar>,
}

impl CalendarRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn new(calendars: Vec<BusinessCalendar>) -> Result<Self, CoreError> {
        let mut map = BTreeMap::new();
        for calendar in calendars {
            let id = calendar.id().to_string();
            if map.insert(id.clone(), calendar).is_some() {
                return Err(CoreError::Validation(format!(
                    "Duplicate calendar id '{id}'"
                )));
            }
        }
        Ok(Self { calendars: map })
    }

    /// The calendars available when no configuration file is given.
    pub fn with_defaults() -> Result<Self, CoreError> {
        let office = WorkingWindow::from_hm(8, 0, 18, 0)?;
        Self::new(vec![
            BusinessCalendar::always_open(ALWAYS_OPEN_CALENDAR_ID, "24x7")?,
            BusinessCalendar::new(
                BUSINESS_HOURS_CALENDAR_ID,
                "Business hours (Mon-Fri 08:00-18:00)",
                uniform_week(&WORKDAYS, office),
            )?,
        ])
    }

    /// Parse a JSON array of calendar definitions.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let inputs: Vec<BusinessCalendarInput> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid calendar configuration: {e}")))?;
        let calendars = inputs
            .into_iter()
            .map(BusinessCalendarInput::into_calendar)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(calendars)
    }

    /// Load calendar definitions from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!(
                "Failed to read calendar configuration {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// Look up a calendar by id.
    pub fn get(&self, id: &str) -> Result<&BusinessCalendar, CoreError> {
        self.calendars.get(id).ok_or_else(|| CoreError::NotFound {
            entity: "BusinessCalendar",
            id: id.to_string(),
        })
    }

    /// Look up an optional calendar reference; `None` means wall-clock time.
    pub fn resolve(&self, id: Option<&str>) -> Result<Option<&BusinessCalendar>, CoreError> {
        id.map(|id| self.get(id)).transpose()
    }

    /// All calendars, ordered by id.
    pub fn list(&self) -> impl Iterator<Item = &BusinessCalendar> {
        self.calendars.values()
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}
