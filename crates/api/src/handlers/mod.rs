//! Request handlers.
//!
//! Handlers resolve calendars from the shared registry, delegate to the pure
//! functions in `helpdesk_core`, and map errors via [`crate::error::AppError`].

pub mod calendars;
pub mod sla;
