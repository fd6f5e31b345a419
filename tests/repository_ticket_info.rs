mod common;

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use tourism_catalog::domain::entities::NewTicketInfo;
use tourism_catalog::domain::repositories::TicketInfoRepository;
use tourism_catalog::error::AppError;
use tourism_catalog::infrastructure::persistence::PgTicketInfoRepository;

fn new_ticket(attraction_id: i64) -> NewTicketInfo {
    NewTicketInfo {
        price: Decimal::new(125050, 2),
        currency: "RUB".to_string(),
        availability: true,
        attraction_id,
    }
}

#[sqlx::test]
async fn test_create_ticket(pool: PgPool) {
    let (_, museum) = common::seed_museum(&pool).await;
    let repo = PgTicketInfoRepository::new(Arc::new(pool));

    let ticket = repo.create(new_ticket(museum)).await.unwrap();

    assert_eq!(ticket.price, Decimal::new(125050, 2));
    assert_eq!(ticket.currency, "RUB");
    assert_eq!(ticket.attraction_id, Some(museum));
}

#[sqlx::test]
async fn test_second_ticket_for_attraction_rejected(pool: PgPool) {
    let (_, museum) = common::seed_museum(&pool).await;
    let repo = PgTicketInfoRepository::new(Arc::new(pool));
    repo.create(new_ticket(museum)).await.unwrap();

    let err = repo.create(new_ticket(museum)).await.unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.to_string(), "Attraction already has ticket info");
}

#[sqlx::test]
async fn test_update_ticket(pool: PgPool) {
    let (_, museum) = common::seed_museum(&pool).await;
    let id = common::create_test_ticket(&pool, Some(museum)).await;
    let repo = PgTicketInfoRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            NewTicketInfo {
                availability: false,
                currency: "USD".to_string(),
                ..new_ticket(museum)
            },
        )
        .await
        .unwrap();

    assert!(!updated.availability);
    assert_eq!(updated.currency, "USD");
}

#[sqlx::test]
async fn test_update_and_delete_missing(pool: PgPool) {
    let (_, museum) = common::seed_museum(&pool).await;
    let repo = PgTicketInfoRepository::new(Arc::new(pool));

    let err = repo.update(999, new_ticket(museum)).await.unwrap_err();
    assert_eq!(err.to_string(), "TicketInfo with this id doesn't exist");

    let err = repo.delete_by_id(999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[sqlx::test]
async fn test_find_all_and_by_id(pool: PgPool) {
    let (address_id, museum) = common::seed_museum(&pool).await;
    let park = common::create_test_attraction(&pool, "Сокольники", address_id, None).await;
    let first = common::create_test_ticket(&pool, Some(museum)).await;
    let second = common::create_test_ticket(&pool, Some(park)).await;
    let repo = PgTicketInfoRepository::new(Arc::new(pool));

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![first, second]);

    let found = repo.find_by_id(second).await.unwrap().unwrap();
    assert_eq!(found.attraction_id, Some(park));
    assert!(repo.exists_by_id(first).await.unwrap());
}

#[sqlx::test]
async fn test_price_rounded_to_zero_rejected(pool: PgPool) {
    let (_, museum) = common::seed_museum(&pool).await;
    let repo = PgTicketInfoRepository::new(Arc::new(pool.clone()));

    let err = repo
        .create(NewTicketInfo {
            price: Decimal::new(1, 3),
            ..new_ticket(museum)
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(err.to_string().starts_with("Check constraint violation"));
    assert_eq!(common::count_rows(&pool, "ticket_info").await, 0);
}

#[sqlx::test]
async fn test_price_overflowing_column_rejected(pool: PgPool) {
    let (_, museum) = common::seed_museum(&pool).await;
    let repo = PgTicketInfoRepository::new(Arc::new(pool));

    let err = repo
        .create(NewTicketInfo {
            price: Decimal::new(1_000_000_000, 0),
            ..new_ticket(museum)
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.to_string(), "Numeric value out of range");
}
