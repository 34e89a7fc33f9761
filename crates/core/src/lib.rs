//! Helpdesk SLA engine.
//!
//! Pure domain logic with no I/O: business-hours calendars, SLA deadline
//! walking, progress/tier classification, and the adapter that turns ticket
//! records into SLA targets. Every computation takes "now" as a parameter.

pub mod business_calendar;
pub mod error;
pub mod sla;
pub mod sla_policy;
pub mod time;
pub mod types;
