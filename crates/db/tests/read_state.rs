//! Integration tests for notification and opinion read-state repositories.

use lexora_db::models::notification::CreateNotification;
use lexora_db::models::opinion::CreateOpinion;
use lexora_db::models::user::CreateUser;
use lexora_db::repositories::{NotificationRepo, OpinionRepo, UserRepo};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password: "irrelevant-here".to_string(),
            display_name: email.to_string(),
            role: "staff".to_string(),
            organization_id: None,
        },
        "not-a-real-hash",
    )
    .await
    .unwrap()
    .id
}

async fn seed_notification(pool: &PgPool, user_id: i64, message: &str) -> i64 {
    NotificationRepo::create(
        pool,
        &CreateNotification {
            user_id,
            case_id: None,
            message: message.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "./migrations")]
async fn mark_read_is_scoped_to_owner(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;
    let id = seed_notification(&pool, owner, "hearing scheduled").await;

    // The wrong user cannot flip someone else's notification.
    assert!(!NotificationRepo::mark_read(&pool, id, other).await.unwrap());
    assert!(NotificationRepo::mark_read(&pool, id, owner).await.unwrap());

    // Second mark is a no-op.
    assert!(!NotificationRepo::mark_read(&pool, id, owner).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn unread_count_tracks_marks(pool: PgPool) {
    let user = seed_user(&pool, "count@example.com").await;
    let first = seed_notification(&pool, user, "one").await;
    seed_notification(&pool, user, "two").await;

    assert_eq!(NotificationRepo::unread_count(&pool, user).await.unwrap(), 2);

    NotificationRepo::mark_read(&pool, first, user).await.unwrap();
    assert_eq!(NotificationRepo::unread_count(&pool, user).await.unwrap(), 1);

    assert_eq!(NotificationRepo::mark_all_read(&pool, user).await.unwrap(), 1);
    assert_eq!(NotificationRepo::unread_count(&pool, user).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn opinion_soft_delete_is_per_side(pool: PgPool) {
    let sender = seed_user(&pool, "sender@example.com").await;
    let receiver = seed_user(&pool, "receiver@example.com").await;

    let opinion = OpinionRepo::create(
        &pool,
        sender,
        &CreateOpinion {
            parent_id: None,
            receiver_id: receiver,
            case_id: None,
            subject: Some("settlement".to_string()),
            body: "thoughts?".to_string(),
        },
    )
    .await
    .unwrap();

    // Receiver deletes their copy; sender still sees it in sent.
    assert!(OpinionRepo::soft_delete_for_user(&pool, opinion.id, receiver).await.unwrap());
    assert!(OpinionRepo::inbox(&pool, receiver, 50, 0).await.unwrap().is_empty());
    assert_eq!(OpinionRepo::sent(&pool, sender, 50, 0).await.unwrap().len(), 1);

    // A stranger cannot delete either side.
    let stranger = seed_user(&pool, "stranger@example.com").await;
    assert!(!OpinionRepo::soft_delete_for_user(&pool, opinion.id, stranger).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn thread_candidates_collects_both_directions(pool: PgPool) {
    let sender = seed_user(&pool, "a@example.com").await;
    let receiver = seed_user(&pool, "b@example.com").await;

    let root = OpinionRepo::create(
        &pool,
        sender,
        &CreateOpinion {
            parent_id: None,
            receiver_id: receiver,
            case_id: None,
            subject: Some("root".to_string()),
            body: "root".to_string(),
        },
    )
    .await
    .unwrap();

    let reply = OpinionRepo::create(
        &pool,
        receiver,
        &CreateOpinion {
            parent_id: Some(root.id),
            receiver_id: sender,
            case_id: None,
            subject: None,
            body: "reply".to_string(),
        },
    )
    .await
    .unwrap();

    let leaf = OpinionRepo::create(
        &pool,
        sender,
        &CreateOpinion {
            parent_id: Some(reply.id),
            receiver_id: receiver,
            case_id: None,
            subject: None,
            body: "reply to reply".to_string(),
        },
    )
    .await
    .unwrap();

    // Starting from the middle row, the walk finds the root above and the
    // leaf below.
    let rows = OpinionRepo::thread_candidates(&pool, reply.id).await.unwrap();
    let mut ids: Vec<i64> = rows.iter().map(|o| o.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![root.id, reply.id, leaf.id]);
}
