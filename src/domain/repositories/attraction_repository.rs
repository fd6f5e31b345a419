//! Repository trait for attractions.

use crate::domain::entities::{Attraction, NewAttraction};
use crate::domain::types::ServiceType;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for attractions.
///
/// Writes keep the `attraction_service` join table and the ticket link in sync
/// with the draft inside a single transaction.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAttractionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttractionRepository: Send + Sync {
    /// Inserts an attraction, links its services and claims its ticket.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if a referenced row vanished meanwhile.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_attraction: NewAttraction) -> Result<Attraction, AppError>;

    /// Lists all attractions ordered by id.
    async fn find_all(&self) -> Result<Vec<Attraction>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Attraction>, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Replaces all fields and service links of an attraction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the attraction does not exist.
    async fn update(&self, id: i64, attraction: NewAttraction) -> Result<Attraction, AppError>;

    /// Deletes an attraction, its ticket info and its service links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the attraction does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Attractions whose name contains `fragment`, ignoring case.
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Attraction>, AppError>;

    /// Attractions whose address is in exactly this city.
    async fn find_by_address_city(&self, city: &str) -> Result<Vec<Attraction>, AppError>;

    /// Attractions whose address is in exactly this region.
    async fn find_by_address_region(&self, region: &str) -> Result<Vec<Attraction>, AppError>;

    /// Attractions offering at least one service of the given type.
    async fn find_by_service_type(
        &self,
        service_type: ServiceType,
    ) -> Result<Vec<Attraction>, AppError>;
}
