/// Domain error shared by every module in `helpdesk_core`.
///
/// Configuration problems (bad windows, non-positive budgets) surface as
/// `Validation` at construction time; the calendar walk itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
