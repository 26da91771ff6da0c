//! Route definitions for the `/statistics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::statistics;
use crate::state::AppState;

/// Routes mounted at `/statistics`.
///
/// ```text
/// GET /recovery -> recovery_statistics (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/recovery", get(statistics::recovery_statistics))
}
