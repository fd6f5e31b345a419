//! PostgreSQL implementation of the ticket info repository.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTicketInfo, TicketInfo};
use crate::domain::repositories::TicketInfoRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct TicketInfoRow {
    id: i64,
    price: Decimal,
    currency: String,
    availability: bool,
    attraction_id: Option<i64>,
}

impl From<TicketInfoRow> for TicketInfo {
    fn from(r: TicketInfoRow) -> Self {
        TicketInfo {
            id: r.id,
            price: r.price,
            currency: r.currency,
            availability: r.availability,
            attraction_id: r.attraction_id,
        }
    }
}

/// PostgreSQL repository for ticket details.
///
/// `ticket_info_attraction_id_key` enforces one ticket per attraction; a
/// violation surfaces as [`AppError::BadRequest`].
pub struct PgTicketInfoRepository {
    pool: Arc<PgPool>,
}

impl PgTicketInfoRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketInfoRepository for PgTicketInfoRepository {
    async fn create(&self, new_ticket: NewTicketInfo) -> Result<TicketInfo, AppError> {
        let row = sqlx::query_as::<_, TicketInfoRow>(
            r#"
            INSERT INTO ticket_info (price, currency, availability, attraction_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, price, currency, availability, attraction_id
            "#,
        )
        .bind(new_ticket.price)
        .bind(&new_ticket.currency)
        .bind(new_ticket.availability)
        .bind(new_ticket.attraction_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<TicketInfo>, AppError> {
        let rows = sqlx::query_as::<_, TicketInfoRow>(
            "SELECT id, price, currency, availability, attraction_id FROM ticket_info ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TicketInfo::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TicketInfo>, AppError> {
        let row = sqlx::query_as::<_, TicketInfoRow>(
            "SELECT id, price, currency, availability, attraction_id FROM ticket_info WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(TicketInfo::from))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM ticket_info WHERE id = $1)")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn update(&self, id: i64, ticket: NewTicketInfo) -> Result<TicketInfo, AppError> {
        let row = sqlx::query_as::<_, TicketInfoRow>(
            r#"
            UPDATE ticket_info SET
                price         = $2,
                currency      = $3,
                availability  = $4,
                attraction_id = $5
            WHERE id = $1
            RETURNING id, price, currency, availability, attraction_id
            "#,
        )
        .bind(id)
        .bind(ticket.price)
        .bind(&ticket.currency)
        .bind(ticket.availability)
        .bind(ticket.attraction_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(TicketInfo::from)
            .ok_or_else(|| AppError::not_found("TicketInfo with this id doesn't exist"))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM ticket_info WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("TicketInfo with this id doesn't exist"));
        }

        Ok(())
    }
}
