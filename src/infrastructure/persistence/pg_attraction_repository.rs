//! PostgreSQL implementation of the attraction repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgExecutor, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Attraction, NewAttraction};
use crate::domain::repositories::AttractionRepository;
use crate::domain::types::{AttractionType, ServiceType};
use crate::error::AppError;

// `ticket_info.attraction_id` is unique, so the join yields at most one row per attraction.
const SELECT_ATTRACTION: &str = r#"
    SELECT a.id, a.name, a.description, a.attraction_type, a.address_id,
           t.id AS ticket_info_id,
           ARRAY(
               SELECT x.service_id FROM attraction_service x
               WHERE x.attraction_id = a.id ORDER BY x.service_id
           ) AS service_ids
    FROM attractions a
    LEFT JOIN ticket_info t ON t.attraction_id = a.id
"#;

#[derive(Debug, FromRow)]
struct AttractionRow {
    id: i64,
    name: String,
    description: Option<String>,
    attraction_type: Option<String>,
    address_id: i64,
    ticket_info_id: Option<i64>,
    service_ids: Vec<i64>,
}

impl TryFrom<AttractionRow> for Attraction {
    type Error = AppError;

    fn try_from(r: AttractionRow) -> Result<Self, Self::Error> {
        let attraction_type = r
            .attraction_type
            .map(|code| {
                AttractionType::from_code(&code).ok_or_else(|| {
                    AppError::internal(format!("Unknown attraction type stored: {code}"))
                })
            })
            .transpose()?;

        Ok(Attraction {
            id: r.id,
            name: r.name,
            description: r.description,
            attraction_type,
            address_id: r.address_id,
            ticket_info_id: r.ticket_info_id,
            service_ids: r.service_ids,
        })
    }
}

fn into_attractions(rows: Vec<AttractionRow>) -> Result<Vec<Attraction>, AppError> {
    rows.into_iter().map(Attraction::try_from).collect()
}

/// PostgreSQL repository for attractions.
///
/// Deleting an attraction cascades to its ticket info and to its rows in
/// `attraction_service`.
pub struct PgAttractionRepository {
    pool: Arc<PgPool>,
}

impl PgAttractionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, condition: &str, value: &str) -> Result<Vec<Attraction>, AppError> {
        let sql = format!("{SELECT_ATTRACTION} {condition} ORDER BY a.id");
        let rows = sqlx::query_as::<_, AttractionRow>(&sql)
            .bind(value)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_attractions(rows)
    }
}

async fn fetch_attraction<'e, E: PgExecutor<'e>>(
    executor: E,
    id: i64,
) -> Result<Option<Attraction>, AppError> {
    let sql = format!("{SELECT_ATTRACTION} WHERE a.id = $1");
    let row = sqlx::query_as::<_, AttractionRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    row.map(Attraction::try_from).transpose()
}

/// Replaces the service links of an attraction. Duplicate ids collapse into one link.
async fn replace_services(
    conn: &mut sqlx::PgConnection,
    attraction_id: i64,
    service_ids: &[i64],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM attraction_service WHERE attraction_id = $1")
        .bind(attraction_id)
        .execute(&mut *conn)
        .await?;

    if service_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO attraction_service (attraction_id, service_id)
        SELECT $1, UNNEST($2::BIGINT[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(attraction_id)
    .bind(service_ids)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Moves the given ticket to this attraction, releasing any other ticket it held.
async fn claim_ticket(
    conn: &mut sqlx::PgConnection,
    attraction_id: i64,
    ticket_info_id: i64,
) -> Result<(), AppError> {
    sqlx::query("UPDATE ticket_info SET attraction_id = NULL WHERE attraction_id = $1 AND id <> $2")
        .bind(attraction_id)
        .bind(ticket_info_id)
        .execute(&mut *conn)
        .await?;

    let result = sqlx::query("UPDATE ticket_info SET attraction_id = $1 WHERE id = $2")
        .bind(attraction_id)
        .bind(ticket_info_id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::bad_request("Referenced ticket info no longer exists"));
    }

    Ok(())
}

#[async_trait]
impl AttractionRepository for PgAttractionRepository {
    async fn create(&self, new_attraction: NewAttraction) -> Result<Attraction, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO attractions (name, description, attraction_type, address_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_attraction.name)
        .bind(&new_attraction.description)
        .bind(new_attraction.attraction_type.map(|t| t.code()))
        .bind(new_attraction.address_id)
        .fetch_one(&mut *tx)
        .await?;

        replace_services(&mut tx, id, &new_attraction.service_ids).await?;

        if let Some(ticket_info_id) = new_attraction.ticket_info_id {
            claim_ticket(&mut tx, id, ticket_info_id).await?;
        }

        let attraction = fetch_attraction(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::internal("Inserted attraction not readable"))?;

        tx.commit().await?;
        Ok(attraction)
    }

    async fn find_all(&self) -> Result<Vec<Attraction>, AppError> {
        let sql = format!("{SELECT_ATTRACTION} ORDER BY a.id");
        let rows = sqlx::query_as::<_, AttractionRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_attractions(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Attraction>, AppError> {
        fetch_attraction(self.pool.as_ref(), id).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM attractions WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn update(&self, id: i64, attraction: NewAttraction) -> Result<Attraction, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE attractions SET
                name            = $2,
                description     = $3,
                attraction_type = $4,
                address_id      = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&attraction.name)
        .bind(&attraction.description)
        .bind(attraction.attraction_type.map(|t| t.code()))
        .bind(attraction.address_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::not_found("Attraction with this id doesn't exist"));
        }

        replace_services(&mut tx, id, &attraction.service_ids).await?;

        // Without a ticket id the current ticket stays attached.
        if let Some(ticket_info_id) = attraction.ticket_info_id {
            claim_ticket(&mut tx, id, ticket_info_id).await?;
        }

        let updated = fetch_attraction(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Attraction with this id doesn't exist"))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM attractions WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Attraction with this id doesn't exist"));
        }

        Ok(())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Attraction>, AppError> {
        self.fetch_where("WHERE position(lower($1::TEXT) IN lower(a.name)) > 0", fragment)
            .await
    }

    async fn find_by_address_city(&self, city: &str) -> Result<Vec<Attraction>, AppError> {
        self.fetch_where(
            "JOIN addresses ad ON ad.id = a.address_id WHERE ad.city = $1",
            city,
        )
        .await
    }

    async fn find_by_address_region(&self, region: &str) -> Result<Vec<Attraction>, AppError> {
        self.fetch_where(
            "JOIN addresses ad ON ad.id = a.address_id WHERE ad.region = $1",
            region,
        )
        .await
    }

    async fn find_by_service_type(
        &self,
        service_type: ServiceType,
    ) -> Result<Vec<Attraction>, AppError> {
        self.fetch_where(
            r#"
            WHERE EXISTS (
                SELECT 1 FROM attraction_service x
                JOIN services sv ON sv.id = x.service_id
                WHERE x.attraction_id = a.id AND sv.service_type = $1
            )
            "#,
            service_type.code(),
        )
        .await
    }
}
