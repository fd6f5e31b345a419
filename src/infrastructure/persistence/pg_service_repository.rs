//! PostgreSQL implementation of the service repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgExecutor, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewService, Service};
use crate::domain::repositories::ServiceRepository;
use crate::domain::types::ServiceType;
use crate::error::AppError;

const SELECT_SERVICE: &str = r#"
    SELECT sv.id, sv.name, sv.description, sv.service_type,
           ARRAY(
               SELECT x.attraction_id FROM attraction_service x
               WHERE x.service_id = sv.id ORDER BY x.attraction_id
           ) AS attraction_ids
    FROM services sv
"#;

#[derive(Debug, FromRow)]
struct ServiceRow {
    id: i64,
    name: String,
    description: Option<String>,
    service_type: Option<String>,
    attraction_ids: Vec<i64>,
}

impl TryFrom<ServiceRow> for Service {
    type Error = AppError;

    fn try_from(r: ServiceRow) -> Result<Self, Self::Error> {
        let service_type = r
            .service_type
            .map(|code| {
                ServiceType::from_code(&code).ok_or_else(|| {
                    AppError::internal(format!("Unknown service type stored: {code}"))
                })
            })
            .transpose()?;

        Ok(Service {
            id: r.id,
            name: r.name,
            description: r.description,
            service_type,
            attraction_ids: r.attraction_ids,
        })
    }
}

/// PostgreSQL repository for services.
///
/// The service is the inverse side of the attraction relation, but writes here
/// still rewrite its `attraction_service` rows.
pub struct PgServiceRepository {
    pool: Arc<PgPool>,
}

impl PgServiceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

async fn fetch_service<'e, E: PgExecutor<'e>>(
    executor: E,
    id: i64,
) -> Result<Option<Service>, AppError> {
    let sql = format!("{SELECT_SERVICE} WHERE sv.id = $1");
    let row = sqlx::query_as::<_, ServiceRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    row.map(Service::try_from).transpose()
}

async fn replace_attractions(
    conn: &mut sqlx::PgConnection,
    service_id: i64,
    attraction_ids: &[i64],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM attraction_service WHERE service_id = $1")
        .bind(service_id)
        .execute(&mut *conn)
        .await?;

    if attraction_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO attraction_service (attraction_id, service_id)
        SELECT UNNEST($1::BIGINT[]), $2
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(attraction_ids)
    .bind(service_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn create(&self, new_service: NewService) -> Result<Service, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO services (name, description, service_type)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&new_service.name)
        .bind(&new_service.description)
        .bind(new_service.service_type.map(|t| t.code()))
        .fetch_one(&mut *tx)
        .await?;

        replace_attractions(&mut tx, id, &new_service.attraction_ids).await?;

        let service = fetch_service(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::internal("Inserted service not readable"))?;

        tx.commit().await?;
        Ok(service)
    }

    async fn find_all(&self) -> Result<Vec<Service>, AppError> {
        let sql = format!("{SELECT_SERVICE} ORDER BY sv.id");
        let rows = sqlx::query_as::<_, ServiceRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Service::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError> {
        fetch_service(self.pool.as_ref(), id).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM services WHERE id = $1)")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn update(&self, id: i64, service: NewService) -> Result<Service, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE services SET
                name         = $2,
                description  = $3,
                service_type = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.service_type.map(|t| t.code()))
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::not_found("Service with this id doesn't exist"));
        }

        replace_attractions(&mut tx, id, &service.attraction_ids).await?;

        let updated = fetch_service(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Service with this id doesn't exist"))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Service with this id doesn't exist"));
        }

        Ok(())
    }
}
