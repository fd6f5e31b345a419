mod common;

use sqlx::PgPool;
use std::sync::Arc;
use tourism_catalog::domain::entities::NewAttraction;
use tourism_catalog::domain::repositories::AttractionRepository;
use tourism_catalog::domain::types::{AttractionType, ServiceType};
use tourism_catalog::error::AppError;
use tourism_catalog::infrastructure::persistence::PgAttractionRepository;

fn new_attraction(name: &str, address_id: i64) -> NewAttraction {
    NewAttraction {
        name: name.to_string(),
        description: Some("Описание".to_string()),
        attraction_type: Some(AttractionType::Palace),
        address_id,
        ticket_info_id: None,
        service_ids: vec![],
    }
}

#[sqlx::test]
async fn test_create_attraction_with_services_and_ticket(pool: PgPool) {
    let address_id = common::create_test_address(&pool, "Пушкин", "Ленинградская область").await;
    let guide = common::create_test_service(&pool, "Экскурсовод", Some("GUIDE")).await;
    let meals = common::create_test_service(&pool, "Кафе", Some("MEALS")).await;
    let ticket = common::create_test_ticket(&pool, None).await;
    let repo = PgAttractionRepository::new(Arc::new(pool));

    let attraction = repo
        .create(NewAttraction {
            ticket_info_id: Some(ticket),
            service_ids: vec![meals, guide, guide],
            ..new_attraction("Екатерининский дворец", address_id)
        })
        .await
        .unwrap();

    assert_eq!(attraction.attraction_type, Some(AttractionType::Palace));
    assert_eq!(attraction.ticket_info_id, Some(ticket));
    assert_eq!(attraction.service_ids, vec![guide, meals]);
}

#[sqlx::test]
async fn test_update_replaces_services_and_keeps_ticket(pool: PgPool) {
    let (_, attraction_id) = common::seed_museum(&pool).await;
    let guide = common::create_test_service(&pool, "Экскурсовод", Some("GUIDE")).await;
    let meals = common::create_test_service(&pool, "Кафе", Some("MEALS")).await;
    common::link_service(&pool, attraction_id, guide).await;
    let ticket = common::create_test_ticket(&pool, Some(attraction_id)).await;
    let address_id = common::create_test_address(&pool, "Тула", "Тульская область").await;
    let repo = PgAttractionRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            attraction_id,
            NewAttraction {
                service_ids: vec![meals],
                ..new_attraction("Ясная Поляна", address_id)
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Ясная Поляна");
    assert_eq!(updated.address_id, address_id);
    assert_eq!(updated.service_ids, vec![meals]);
    assert_eq!(updated.ticket_info_id, Some(ticket));
}

#[sqlx::test]
async fn test_update_moves_ticket_between_attractions(pool: PgPool) {
    let (address_id, first) = common::seed_museum(&pool).await;
    let second = common::create_test_attraction(&pool, "Музей Пушкина", address_id, None).await;
    let first_ticket = common::create_test_ticket(&pool, Some(first)).await;
    let second_ticket = common::create_test_ticket(&pool, Some(second)).await;
    let repo = PgAttractionRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            second,
            NewAttraction {
                ticket_info_id: Some(first_ticket),
                ..new_attraction("Музей Пушкина", address_id)
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.ticket_info_id, Some(first_ticket));
    let first_now = repo.find_by_id(first).await.unwrap().unwrap();
    assert_eq!(first_now.ticket_info_id, None);
    assert_ne!(updated.ticket_info_id, Some(second_ticket));
}

#[sqlx::test]
async fn test_update_missing_attraction(pool: PgPool) {
    let address_id = common::create_test_address(&pool, "Тула", "Тульская область").await;
    let repo = PgAttractionRepository::new(Arc::new(pool));

    let err = repo
        .update(999, new_attraction("Кремль", address_id))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[sqlx::test]
async fn test_create_with_unknown_address_is_bad_request(pool: PgPool) {
    let repo = PgAttractionRepository::new(Arc::new(pool));

    let err = repo.create(new_attraction("Кремль", 999)).await.unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
}

#[sqlx::test]
async fn test_delete_cascades_ticket_and_links(pool: PgPool) {
    let (_, attraction_id) = common::seed_museum(&pool).await;
    let guide = common::create_test_service(&pool, "Экскурсовод", Some("GUIDE")).await;
    common::link_service(&pool, attraction_id, guide).await;
    common::create_test_ticket(&pool, Some(attraction_id)).await;
    let repo = PgAttractionRepository::new(Arc::new(pool.clone()));

    repo.delete_by_id(attraction_id).await.unwrap();

    assert_eq!(common::count_rows(&pool, "ticket_info").await, 0);
    assert_eq!(common::count_rows(&pool, "attraction_service").await, 0);
    assert_eq!(common::count_rows(&pool, "services").await, 1);
}

#[sqlx::test]
async fn test_find_by_name_containing_ignores_case(pool: PgPool) {
    let (address_id, gallery) = common::seed_museum(&pool).await;
    common::create_test_attraction(&pool, "Парк Горького", address_id, Some("PARK")).await;
    let repo = PgAttractionRepository::new(Arc::new(pool));

    let found = repo.find_by_name_containing("ГАЛЕРЕЯ").await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, gallery);
}

#[sqlx::test]
async fn test_find_by_city_and_region_exact(pool: PgPool) {
    let (_, moscow_museum) = common::seed_museum(&pool).await;
    let kazan = common::create_test_address(&pool, "Казань", "Татарстан").await;
    let kremlin = common::create_test_attraction(&pool, "Казанский кремль", kazan, None).await;
    let repo = PgAttractionRepository::new(Arc::new(pool));

    let in_moscow = repo.find_by_address_city("Москва").await.unwrap();
    assert_eq!(in_moscow.iter().map(|a| a.id).collect::<Vec<_>>(), vec![moscow_museum]);

    let in_tatarstan = repo.find_by_address_region("Татарстан").await.unwrap();
    assert_eq!(in_tatarstan.iter().map(|a| a.id).collect::<Vec<_>>(), vec![kremlin]);

    assert!(repo.find_by_address_city("моск").await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_find_by_service_type(pool: PgPool) {
    let (address_id, museum) = common::seed_museum(&pool).await;
    let park = common::create_test_attraction(&pool, "Парк Горького", address_id, Some("PARK")).await;
    let guide = common::create_test_service(&pool, "Экскурсовод", Some("GUIDE")).await;
    let meals = common::create_test_service(&pool, "Кафе", Some("MEALS")).await;
    common::link_service(&pool, museum, guide).await;
    common::link_service(&pool, museum, meals).await;
    common::link_service(&pool, park, meals).await;
    let repo = PgAttractionRepository::new(Arc::new(pool));

    let with_guide = repo.find_by_service_type(ServiceType::Guide).await.unwrap();
    assert_eq!(with_guide.len(), 1);
    assert_eq!(with_guide[0].id, museum);

    let with_meals = repo.find_by_service_type(ServiceType::Meals).await.unwrap();
    assert_eq!(with_meals.len(), 2);

    assert!(repo
        .find_by_service_type(ServiceType::CarExcursion)
        .await
        .unwrap()
        .is_empty());
}
