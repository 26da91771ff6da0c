//! Route definitions for the `/admin` resource. Admin only.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET  /users       -> list_users
/// POST /users       -> create_user
/// GET  /users/{id}  -> get_user
/// PUT  /users/{id}  -> update_user (deactivation via is_active)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user).put(users::update_user))
}
