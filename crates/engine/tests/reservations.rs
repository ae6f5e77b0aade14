use sea_orm::Database;

use engine::{Engine, EngineError, LaundryLookup, MoneyCents};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::new(db)
}

async fn user_with_balance(engine: &Engine, cents: i64) -> i32 {
    engine
        .create_user(
            Some("Ada".to_string()),
            Some("al123".to_string()),
            MoneyCents::new(cents),
        )
        .await
        .unwrap()
        .id
}

async fn washer(engine: &Engine) -> i32 {
    let dorm = engine.create_dorm(Some("North".to_string())).await.unwrap();
    engine
        .create_laundry(dorm.id, Some(3), Some("washer".to_string()))
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn reservation_debits_cost_and_records_session() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 200).await;
    let laundry_id = washer(&engine).await;

    let session = engine
        .reserve_machine(user_id, laundry_id, Some(10))
        .await
        .unwrap();

    assert_eq!(session.user_id, user_id);
    assert_eq!(session.laundry_id, laundry_id);
    assert_eq!(session.duration, 10);

    let user = engine.user(user_id).await.unwrap();
    assert_eq!(user.balance, 25);
}

#[tokio::test]
async fn insufficient_funds_leaves_everything_unchanged() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 100).await;
    let laundry_id = washer(&engine).await;

    let err = engine
        .reserve_machine(user_id, laundry_id, Some(10))
        .await
        .unwrap_err();
    match err {
        EngineError::InsufficientFunds {
            required,
            available,
        } => {
            assert_eq!(required, MoneyCents::new(175));
            assert_eq!(available, MoneyCents::new(100));
        }
        other => panic!("expected InsufficientFunds, got {other:?}"),
    }

    let user = engine.user(user_id).await.unwrap();
    assert_eq!(user.balance, 100);
    assert!(matches!(
        engine.laundry(laundry_id).await.unwrap(),
        LaundryLookup::Machine(_)
    ));
}

#[tokio::test]
async fn second_reservation_without_funds_is_rejected() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 200).await;
    let laundry_id = washer(&engine).await;

    engine
        .reserve_machine(user_id, laundry_id, Some(10))
        .await
        .unwrap();
    let err = engine
        .reserve_machine(user_id, laundry_id, Some(10))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::InsufficientFunds { .. }));
    let user = engine.user(user_id).await.unwrap();
    assert_eq!(user.balance, 25);
}

#[tokio::test]
async fn reservation_against_missing_user_creates_nothing() {
    let engine = engine_with_db().await;
    let laundry_id = washer(&engine).await;

    let err = engine
        .reserve_machine(99, laundry_id, Some(10))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound { entity: "User", .. }));
    assert!(matches!(
        engine.laundry(laundry_id).await.unwrap(),
        LaundryLookup::Machine(_)
    ));
}

#[tokio::test]
async fn reservation_against_missing_laundry_creates_nothing() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 10_000).await;

    let err = engine.reserve_machine(user_id, 99, Some(10)).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::NotFound {
            entity: "Laundry",
            ..
        }
    ));

    let user = engine.user(user_id).await.unwrap();
    assert_eq!(user.balance, 10_000);
}

#[tokio::test]
async fn missing_duration_is_rejected_before_the_debit() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 200).await;
    let laundry_id = washer(&engine).await;

    let err = engine
        .reserve_machine(user_id, laundry_id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::MissingField("Laundry's duration")));

    let user = engine.user(user_id).await.unwrap();
    assert_eq!(user.balance, 200);
}

#[tokio::test]
async fn non_positive_duration_is_accepted_as_is() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 400).await;
    let laundry_id = washer(&engine).await;

    let session = engine
        .reserve_machine(user_id, laundry_id, Some(-5))
        .await
        .unwrap();
    assert_eq!(session.duration, -5);
}

#[tokio::test]
async fn transaction_amounts_commute() {
    let engine = engine_with_db().await;

    let amounts = [500, -300, 200];
    let forward = user_with_balance(&engine, 0).await;
    for cents in amounts {
        engine
            .apply_transaction(forward, Some(MoneyCents::new(cents)))
            .await
            .unwrap();
    }

    let reverse = user_with_balance(&engine, 0).await;
    for cents in amounts.iter().rev() {
        engine
            .apply_transaction(reverse, Some(MoneyCents::new(*cents)))
            .await
            .unwrap();
    }

    assert_eq!(engine.user(forward).await.unwrap().balance, 400);
    assert_eq!(engine.user(reverse).await.unwrap().balance, 400);
}

#[tokio::test]
async fn transaction_may_drive_balance_negative() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 0).await;

    let user = engine
        .apply_transaction(user_id, Some(MoneyCents::new(-500)))
        .await
        .unwrap();
    assert_eq!(user.balance, -500);
}

#[tokio::test]
async fn missing_amount_is_rejected_after_the_user_check() {
    let engine = engine_with_db().await;

    // User lookup comes first, so a missing user wins over a missing amount.
    let err = engine.apply_transaction(99, None).await.unwrap_err();
    assert!(matches!(err, EngineError::NotFound { entity: "User", .. }));

    let user_id = user_with_balance(&engine, 0).await;
    let err = engine.apply_transaction(user_id, None).await.unwrap_err();
    assert!(matches!(err, EngineError::MissingField("Amount")));
}

#[tokio::test]
async fn laundry_cost_follows_the_price_table() {
    let engine = engine_with_db().await;
    let dorm = engine.create_dorm(Some("North".to_string())).await.unwrap();

    let washer = engine
        .create_laundry(dorm.id, Some(1), Some("washer".to_string()))
        .await
        .unwrap();
    assert_eq!(washer.cost, 175);

    let dryer = engine
        .create_laundry(dorm.id, Some(2), Some("dryer".to_string()))
        .await
        .unwrap();
    assert_eq!(dryer.cost, 130);

    // Exact-literal match only: a case variant does not get the washer price.
    let miscased = engine
        .create_laundry(dorm.id, Some(3), Some("Washer".to_string()))
        .await
        .unwrap();
    assert_eq!(miscased.cost, 130);
}

#[tokio::test]
async fn laundry_creation_checks_dorm_before_fields() {
    let engine = engine_with_db().await;

    let err = engine.create_laundry(99, None, None).await.unwrap_err();
    assert!(matches!(err, EngineError::NotFound { entity: "Dorm", .. }));

    let dorm = engine.create_dorm(Some("North".to_string())).await.unwrap();
    let err = engine
        .create_laundry(dorm.id, None, Some("washer".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::MissingField("Laundry's number")));
}

#[tokio::test]
async fn machine_read_returns_first_session_once_used() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 1_000).await;
    let laundry_id = washer(&engine).await;

    let first = engine
        .reserve_machine(user_id, laundry_id, Some(30))
        .await
        .unwrap();
    engine
        .reserve_machine(user_id, laundry_id, Some(45))
        .await
        .unwrap();

    match engine.laundry(laundry_id).await.unwrap() {
        LaundryLookup::Session(session) => assert_eq!(session.id, first.id),
        LaundryLookup::Machine(_) => panic!("expected the first recorded session"),
    }
}

#[tokio::test]
async fn deleting_a_dorm_leaves_its_machines_queryable() {
    let engine = engine_with_db().await;
    let laundry_id = washer(&engine).await;

    let dorm = engine.dorms().await.unwrap().remove(0);
    engine.delete_dorm(dorm.id).await.unwrap();

    assert!(matches!(
        engine.laundry(laundry_id).await.unwrap(),
        LaundryLookup::Machine(_)
    ));
}

#[tokio::test]
async fn deleted_user_is_gone() {
    let engine = engine_with_db().await;
    let user_id = user_with_balance(&engine, 150).await;

    let removed = engine.delete_user(user_id).await.unwrap();
    assert_eq!(removed.id, user_id);
    assert_eq!(removed.balance, 150);

    let err = engine.user(user_id).await.unwrap_err();
    assert!(matches!(err, EngineError::NotFound { entity: "User", .. }));
}
