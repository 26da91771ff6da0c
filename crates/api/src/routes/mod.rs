pub mod admin;
pub mod auth;
pub mod cases;
pub mod health;
pub mod notifications;
pub mod opinions;
pub mod statistics;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
/// /auth/me                         current user profile
///
/// /cases                           aggregated listing, create
/// /cases/{id}                      get (aggregated), update, soft delete
/// /cases/{case_id}/parties         list, create
/// /cases/{case_id}/handlers        list, replace (PUT)
/// /cases/{case_id}/activities      list, create
/// /cases/{case_id}/deadlines       list, create
///
/// /parties/{id}                    update, delete
/// /deadlines/{id}                  update
///
/// /statistics/recovery             set-wide recovery stats (staff)
///
/// /notifications                   list (?unread_only, limit, offset)
/// /notifications/read-all          mark all read (POST)
/// /notifications/unread-count      unread count (GET)
/// /notifications/{id}/read         mark read (POST)
///
/// /opinions                        send (POST)
/// /opinions/inbox                  received, newest first
/// /opinions/sent                   sent, newest first
/// /opinions/unread-count           unread count (GET)
/// /opinions/{id}/thread            reconstructed thread (GET)
/// /opinions/{id}/read              mark read (POST)
/// /opinions/{id}                   per-side soft delete (DELETE)
///
/// /todos                           list, create
/// /todos/{id}                      update, delete
///
/// /admin/users                     list, create (admin only)
/// /admin/users/{id}                get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Cases and their nested sub-resources.
        .nest("/cases", cases::router())
        // Party and deadline operations by their own id.
        .nest("/parties", cases::parties_router())
        .nest("/deadlines", cases::deadlines_router())
        // Set-wide recovery statistics.
        .nest("/statistics", statistics::router())
        // Notifications.
        .nest("/notifications", notifications::router())
        // Opinions (internal messages).
        .nest("/opinions", opinions::router())
        // Personal todos.
        .nest("/todos", todos::router())
        // Admin user management.
        .nest("/admin", admin::router())
}
