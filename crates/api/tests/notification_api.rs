//! HTTP-level integration tests for `/notifications` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, login, post_auth};
use lexora_db::models::notification::CreateNotification;
use lexora_db::repositories::NotificationRepo;
use sqlx::PgPool;

async fn seed_notification(pool: &PgPool, user_id: i64, message: &str) -> i64 {
    let row = NotificationRepo::create(
        pool,
        &CreateNotification {
            user_id,
            case_id: None,
            message: message.to_string(),
        },
    )
    .await
    .expect("notification creation should succeed");
    row.id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unread_count_tracks_read_flips(pool: PgPool) {
    let (user, pw) = create_test_user(&pool, "reader@test.com", "staff").await;
    let first = seed_notification(&pool, user.id, "one").await;
    seed_notification(&pool, user.id, "two").await;

    let app = common::build_test_app(pool);
    let token = login(app.clone(), "reader@test.com", &pw).await;

    let response = get_auth(app.clone(), "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 2);

    let response = post_auth(
        app.clone(),
        &format!("/api/v1/notifications/{first}/read"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app.clone(), "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 1);

    // Marking again flips nothing and reports 404, so an optimistic client
    // never double-decrements.
    let response = post_auth(
        app.clone(),
        &format!("/api/v1/notifications/{first}/read"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cannot_read_someone_elses_notification(pool: PgPool) {
    let (owner, _) = create_test_user(&pool, "owner@test.com", "staff").await;
    let (_other, other_pw) = create_test_user(&pool, "other@test.com", "staff").await;
    let id = seed_notification(&pool, owner.id, "private").await;

    let app = common::build_test_app(pool.clone());
    let token = login(app.clone(), "other@test.com", &other_pw).await;

    let response = post_auth(app, &format!("/api/v1/notifications/{id}/read"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let count = NotificationRepo::unread_count(&pool, owner.id).await.unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn read_all_flips_everything(pool: PgPool) {
    let (user, pw) = create_test_user(&pool, "bulk@test.com", "staff").await;
    for i in 0..3 {
        seed_notification(&pool, user.id, &format!("n{i}")).await;
    }

    let app = common::build_test_app(pool);
    let token = login(app.clone(), "bulk@test.com", &pw).await;

    let response = post_auth(app.clone(), "/api/v1/notifications/read-all", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 3);

    let response = get_auth(app, "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_supports_unread_only(pool: PgPool) {
    let (user, pw) = create_test_user(&pool, "lister@test.com", "staff").await;
    let first = seed_notification(&pool, user.id, "old").await;
    seed_notification(&pool, user.id, "new").await;
    NotificationRepo::mark_read(&pool, first, user.id).await.unwrap();

    let app = common::build_test_app(pool);
    let token = login(app.clone(), "lister@test.com", &pw).await;

    let response = get_auth(app.clone(), "/api/v1/notifications", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get_auth(app, "/api/v1/notifications?unread_only=true", &token).await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["message"], "new");
}
