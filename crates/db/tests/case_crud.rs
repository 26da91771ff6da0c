//! Integration tests for case, party, and activity repositories.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted cases are hidden from lookups and id scopes
//! - Batch fetches return rows newest-first
//! - Payment filtering happens in SQL, not just in the aggregation layer

use lexora_db::models::case::{CreateCase, UpdateCase};
use lexora_db::models::party::CreateParty;
use lexora_db::models::recovery_activity::CreateRecoveryActivity;
use lexora_db::repositories::{CaseRepo, PartyRepo, RecoveryActivityRepo};
use sqlx::PgPool;

fn new_case(number: &str, principal: f64) -> CreateCase {
    CreateCase {
        case_number: number.to_string(),
        principal_amount: principal,
        status_code: None,
        category: None,
        organization_id: None,
    }
}

fn individual(party_type: &str, name: &str) -> CreateParty {
    CreateParty {
        party_type: party_type.to_string(),
        entity_kind: None,
        person_name: Some(name.to_string()),
        company_name: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_and_find_case(pool: PgPool) {
    let created = CaseRepo::create(&pool, &new_case("C-2026-001", 1000.0))
        .await
        .unwrap();
    assert_eq!(created.status_code, 10);
    assert_eq!(created.category, "debt_recovery");

    let found = CaseRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().case_number, "C-2026-001");
}

#[sqlx::test(migrations = "./migrations")]
async fn soft_deleted_case_is_hidden(pool: PgPool) {
    let created = CaseRepo::create(&pool, &new_case("C-2026-002", 500.0))
        .await
        .unwrap();

    assert!(CaseRepo::soft_delete(&pool, created.id).await.unwrap());
    assert!(CaseRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(CaseRepo::list_by_ids(&pool, &[created.id]).await.unwrap().is_empty());

    // Second soft delete is a no-op.
    assert!(!CaseRepo::soft_delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn batch_fetch_is_newest_first(pool: PgPool) {
    let a = CaseRepo::create(&pool, &new_case("C-A", 1.0)).await.unwrap();
    let b = CaseRepo::create(&pool, &new_case("C-B", 2.0)).await.unwrap();
    let c = CaseRepo::create(&pool, &new_case("C-C", 3.0)).await.unwrap();

    // created_at ties are possible within a transaction; pin distinct times.
    for (id, offset) in [(a.id, 3), (b.id, 2), (c.id, 1)] {
        sqlx::query("UPDATE cases SET created_at = NOW() - make_interval(days => $2) WHERE id = $1")
            .bind(id)
            .bind(offset)
            .execute(&pool)
            .await
            .unwrap();
    }

    let rows = CaseRepo::list_by_ids(&pool, &[a.id, b.id, c.id]).await.unwrap();
    let numbers: Vec<&str> = rows.iter().map(|r| r.case_number.as_str()).collect();
    assert_eq!(numbers, vec!["C-C", "C-B", "C-A"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let created = CaseRepo::create(&pool, &new_case("C-2026-003", 750.0))
        .await
        .unwrap();

    let updated = CaseRepo::update(
        &pool,
        created.id,
        &UpdateCase {
            principal_amount: None,
            status_code: Some(40),
            category: None,
            organization_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status_code, 40);
    assert!((updated.principal_amount - 750.0).abs() < f64::EPSILON);
    assert_eq!(updated.category, "debt_recovery");
}

#[sqlx::test(migrations = "./migrations")]
async fn parties_fetched_per_case_batch(pool: PgPool) {
    let one = CaseRepo::create(&pool, &new_case("C-P1", 0.0)).await.unwrap();
    let two = CaseRepo::create(&pool, &new_case("C-P2", 0.0)).await.unwrap();

    PartyRepo::create(&pool, one.id, &individual("creditor", "Alice")).await.unwrap();
    PartyRepo::create(&pool, one.id, &individual("debtor", "Bob")).await.unwrap();
    PartyRepo::create(&pool, two.id, &individual("creditor", "Carol")).await.unwrap();

    let rows = PartyRepo::list_for_cases(&pool, &[one.id]).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|p| p.case_id == one.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn payment_filter_applied_in_sql(pool: PgPool) {
    let case = CaseRepo::create(&pool, &new_case("C-R1", 1000.0)).await.unwrap();

    for (activity_type, amount) in [("payment", 100.0), ("note", 50.0), ("payment", 25.0)] {
        RecoveryActivityRepo::create(
            &pool,
            case.id,
            &CreateRecoveryActivity {
                activity_type: activity_type.to_string(),
                amount,
                occurred_at: None,
            },
        )
        .await
        .unwrap();
    }

    let payments = RecoveryActivityRepo::list_payments_for_cases(&pool, &[case.id])
        .await
        .unwrap();
    assert_eq!(payments.len(), 2);
    let total: f64 = payments.iter().map(|p| p.amount).sum();
    assert!((total - 125.0).abs() < 1e-9);
}
