#![allow(dead_code)]

use axum_test::TestServer;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use tourism_catalog::routes::app_router;
use tourism_catalog::state::AppState;

pub async fn create_test_address(pool: &PgPool, city: &str, region: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO addresses (region, city, latitude, longitude) VALUES ($1, $2, 55.75, 37.62) RETURNING id",
    )
    .bind(region)
    .bind(city)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_attraction(
    pool: &PgPool,
    name: &str,
    address_id: i64,
    attraction_type: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO attractions (name, attraction_type, address_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(attraction_type)
    .bind(address_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_service(pool: &PgPool, name: &str, service_type: Option<&str>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO services (name, service_type) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(service_type)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_service(pool: &PgPool, attraction_id: i64, service_id: i64) {
    sqlx::query("INSERT INTO attraction_service (attraction_id, service_id) VALUES ($1, $2)")
        .bind(attraction_id)
        .bind(service_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_ticket(pool: &PgPool, attraction_id: Option<i64>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ticket_info (price, currency, availability, attraction_id) VALUES ($1, 'RUB', TRUE, $2) RETURNING id",
    )
    .bind(Decimal::new(50000, 2))
    .bind(attraction_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Address in Moscow with one museum on it; returns `(address_id, attraction_id)`.
pub async fn seed_museum(pool: &PgPool) -> (i64, i64) {
    let address_id = create_test_address(pool, "Москва", "Москва").await;
    let attraction_id =
        create_test_attraction(pool, "Третьяковская галерея", address_id, Some("MUSEUM")).await;
    (address_id, attraction_id)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Full application router, Swagger UI included, as served in production.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = app_router(create_test_state(pool), true);
    TestServer::new(app).unwrap()
}
