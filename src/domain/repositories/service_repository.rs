//! Repository trait for services.

use crate::domain::entities::{NewService, Service};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for services offered at attractions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgServiceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Inserts a service and links it to the listed attractions.
    async fn create(&self, new_service: NewService) -> Result<Service, AppError>;

    /// Lists all services ordered by id.
    async fn find_all(&self) -> Result<Vec<Service>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Replaces all fields and attraction links of a service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the service does not exist.
    async fn update(&self, id: i64, service: NewService) -> Result<Service, AppError>;

    /// Deletes a service and its attraction links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the service does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
