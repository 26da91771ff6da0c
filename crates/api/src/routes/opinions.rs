//! Route definitions for the `/opinions` resource.
//!
//! All endpoints require authentication.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::opinions;
use crate::state::AppState;

/// Routes mounted at `/opinions`.
///
/// ```text
/// POST   /              -> create_opinion
/// GET    /inbox         -> inbox
/// GET    /sent          -> sent
/// GET    /unread-count  -> unread_count
/// GET    /{id}/thread   -> thread
/// POST   /{id}/read     -> mark_read
/// DELETE /{id}          -> delete_opinion (per-side soft delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(opinions::create_opinion))
        .route("/inbox", get(opinions::inbox))
        .route("/sent", get(opinions::sent))
        .route("/unread-count", get(opinions::unread_count))
        .route("/{id}/thread", get(opinions::thread))
        .route("/{id}/read", post(opinions::mark_read))
        .route("/{id}", delete(opinions::delete_opinion))
}
