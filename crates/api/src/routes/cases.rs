//! Route definitions for the `/cases` resource.
//!
//! Also nests party, handler, activity, and deadline routes under
//! `/cases/{case_id}/...`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{activities, case_handlers, cases, deadlines, parties};
use crate::state::AppState;

/// Routes mounted at `/cases`.
///
/// ```text
/// GET    /                       -> list_cases (aggregated listing)
/// POST   /                       -> create_case (staff)
/// GET    /{id}                   -> get_case (aggregated)
/// PUT    /{id}                   -> update_case (staff)
/// DELETE /{id}                   -> delete_case (staff)
///
/// GET    /{case_id}/parties      -> list_parties
/// POST   /{case_id}/parties      -> create_party (staff)
///
/// GET    /{case_id}/handlers     -> list_handlers
/// PUT    /{case_id}/handlers     -> replace_handlers (staff)
///
/// GET    /{case_id}/activities   -> list_activities
/// POST   /{case_id}/activities   -> create_activity (staff)
///
/// GET    /{case_id}/deadlines    -> list_deadlines
/// POST   /{case_id}/deadlines    -> create_deadline (staff)
/// ```
pub fn router() -> Router<AppState> {
    let party_routes = Router::new().route(
        "/",
        get(parties::list_parties).post(parties::create_party),
    );

    let handler_routes = Router::new().route(
        "/",
        get(case_handlers::list_handlers).put(case_handlers::replace_handlers),
    );

    let activity_routes = Router::new().route(
        "/",
        get(activities::list_activities).post(activities::create_activity),
    );

    let deadline_routes = Router::new().route(
        "/",
        get(deadlines::list_deadlines).post(deadlines::create_deadline),
    );

    Router::new()
        .route("/", get(cases::list_cases).post(cases::create_case))
        .route(
            "/{id}",
            get(cases::get_case)
                .put(cases::update_case)
                .delete(cases::delete_case),
        )
        .nest("/{case_id}/parties", party_routes)
        .nest("/{case_id}/handlers", handler_routes)
        .nest("/{case_id}/activities", activity_routes)
        .nest("/{case_id}/deadlines", deadline_routes)
}

/// Routes mounted at `/parties` (operations on a party by its own id).
///
/// ```text
/// PUT    /{id} -> update_party (staff)
/// DELETE /{id} -> delete_party (staff)
/// ```
pub fn parties_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(parties::update_party).delete(parties::delete_party),
    )
}

/// Routes mounted at `/deadlines` (operations on a deadline by its own id).
///
/// ```text
/// PUT /{id} -> update_deadline (staff)
/// ```
pub fn deadlines_router() -> Router<AppState> {
    Router::new().route("/{id}", put(deadlines::update_deadline))
}
