//! HTTP-level integration tests for auth and admin user endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, login, post_json, post_json_auth};
use sqlx::PgPool;
use lexora_db::repositories::UserRepo;

#[sqlx::test(migrations = "../db/migrations")]
async fn login_success_returns_tokens_and_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "login@test.com", "staff").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "login@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "login@test.com");
    assert_eq!(json["user"]["role"], "staff");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_returns_401(pool: PgPool) {
    create_test_user(&pool, "wrongpw@test.com", "staff").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_unknown_email_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_tokens(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "refresher@test.com", "staff").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "email": "refresher@test.com", "password": password });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    let login_json = body_json(response).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["refresh_token"].is_string());
    assert_ne!(json["refresh_token"].as_str().unwrap(), refresh_token);

    // The presented token was rotated out and no longer works.
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_invalidates_refresh_token(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "leaver@test.com", "staff").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "email": "leaver@test.com", "password": password });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    let json = body_json(response).await;
    let access = json["access_token"].as_str().unwrap().to_string();
    let refresh = json["refresh_token"].as_str().unwrap().to_string();

    let response = common::post_auth(app.clone(), "/api/v1/auth/logout", &access).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_returns_profile_without_hashes(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "profile@test.com", "client").await;
    let app = common::build_test_app(pool.clone());
    let token = login(app.clone(), "profile@test.com", &password).await;

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "profile@test.com");
    assert!(json["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/notifications").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Admin user management
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_can_create_user_staff_cannot(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "admin@test.com", "admin").await;
    let (_staff, staff_pw) = create_test_user(&pool, "staff@test.com", "staff").await;
    let app = common::build_test_app(pool.clone());

    let admin_token = login(app.clone(), "admin@test.com", &admin_pw).await;
    let staff_token = login(app.clone(), "staff@test.com", &staff_pw).await;

    let new_user = serde_json::json!({
        "email": "new@test.com",
        "password": "a strong password",
        "display_name": "New User",
        "role": "client"
    });

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/users",
        &staff_token,
        new_user.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(app, "/api/v1/admin/users", &admin_token, new_user).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = UserRepo::find_by_email(&pool, "new@test.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(created.role, "client");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_returns_409(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "admin@test.com", "admin").await;
    create_test_user(&pool, "taken@test.com", "client").await;
    let app = common::build_test_app(pool);
    let admin_token = login(app.clone(), "admin@test.com", &admin_pw).await;

    let body = serde_json::json!({
        "email": "taken@test.com",
        "password": "a strong password",
        "display_name": "Dup",
        "role": "client"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", &admin_token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
