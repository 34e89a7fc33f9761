//! Route definitions for the `/sla` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::sla;
use crate::state::AppState;

/// Routes mounted at `/sla`.
///
/// ```text
/// POST   /deadline                    -> compute a deadline
/// POST   /progress                    -> compute progress for one target
/// POST   /tickets                     -> evaluate a batch of tickets
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deadline", post(sla::compute_deadline))
        .route("/progress", post(sla::compute_progress))
        .route("/tickets", post(sla::evaluate_tickets))
}
