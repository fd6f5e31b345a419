//! PostgreSQL implementation of the address repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgExecutor, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Address, NewAddress};
use crate::domain::repositories::AddressRepository;
use crate::error::AppError;

const SELECT_ADDRESS: &str = r#"
    SELECT ad.id, ad.building, ad.street, ad.region, ad.city, ad.latitude, ad.longitude,
           ARRAY(
               SELECT a.id FROM attractions a WHERE a.address_id = ad.id ORDER BY a.id
           ) AS attraction_ids
    FROM addresses ad
"#;

#[derive(Debug, FromRow)]
struct AddressRow {
    id: i64,
    building: Option<i32>,
    street: Option<String>,
    region: String,
    city: String,
    latitude: f64,
    longitude: f64,
    attraction_ids: Vec<i64>,
}

impl From<AddressRow> for Address {
    fn from(r: AddressRow) -> Self {
        Address {
            id: r.id,
            building: r.building,
            street: r.street,
            region: r.region,
            city: r.city,
            latitude: r.latitude,
            longitude: r.longitude,
            attraction_ids: r.attraction_ids,
        }
    }
}

/// PostgreSQL repository for addresses.
///
/// Deleting an address cascades to its attractions through the
/// `attractions.address_id` foreign key.
pub struct PgAddressRepository {
    pool: Arc<PgPool>,
}

impl PgAddressRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

async fn fetch_address<'e, E: PgExecutor<'e>>(
    executor: E,
    id: i64,
) -> Result<Option<Address>, AppError> {
    let sql = format!("{SELECT_ADDRESS} WHERE ad.id = $1");
    let row = sqlx::query_as::<_, AddressRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Address::from))
}

/// Points every listed attraction at `address_id`.
async fn claim_attractions<'e, E: PgExecutor<'e>>(
    executor: E,
    address_id: i64,
    attraction_ids: &[i64],
) -> Result<(), AppError> {
    if attraction_ids.is_empty() {
        return Ok(());
    }

    let result = sqlx::query("UPDATE attractions SET address_id = $1 WHERE id = ANY($2)")
        .bind(address_id)
        .bind(attraction_ids)
        .execute(executor)
        .await?;

    let mut distinct = attraction_ids.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    if result.rows_affected() != distinct.len() as u64 {
        return Err(AppError::bad_request(
            "Some of the listed attractions no longer exist",
        ));
    }

    Ok(())
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn create(&self, new_address: NewAddress) -> Result<Address, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO addresses (building, street, region, city, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(new_address.building)
        .bind(&new_address.street)
        .bind(&new_address.region)
        .bind(&new_address.city)
        .bind(new_address.latitude)
        .bind(new_address.longitude)
        .fetch_one(&mut *tx)
        .await?;

        claim_attractions(&mut *tx, id, &new_address.attraction_ids).await?;

        let address = fetch_address(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::internal("Inserted address not readable"))?;

        tx.commit().await?;
        Ok(address)
    }

    async fn find_all(&self) -> Result<Vec<Address>, AppError> {
        let sql = format!("{SELECT_ADDRESS} ORDER BY ad.id");
        let rows = sqlx::query_as::<_, AddressRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Address::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Address>, AppError> {
        fetch_address(self.pool.as_ref(), id).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM addresses WHERE id = $1)")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn update(&self, id: i64, address: NewAddress) -> Result<Address, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE addresses SET
                building  = $2,
                street    = $3,
                region    = $4,
                city      = $5,
                latitude  = $6,
                longitude = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(address.building)
        .bind(&address.street)
        .bind(&address.region)
        .bind(&address.city)
        .bind(address.latitude)
        .bind(address.longitude)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::not_found("Address with this id doesn't exist"));
        }

        claim_attractions(&mut *tx, id, &address.attraction_ids).await?;

        let updated = fetch_address(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Address with this id doesn't exist"))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Address with this id doesn't exist"));
        }

        Ok(())
    }
}
