//! Repository trait for ticket info.

use crate::domain::entities::{NewTicketInfo, TicketInfo};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for ticket details.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTicketInfoRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketInfoRepository: Send + Sync {
    /// Inserts ticket info for an attraction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the attraction already has a ticket.
    async fn create(&self, new_ticket: NewTicketInfo) -> Result<TicketInfo, AppError>;

    /// Lists all tickets ordered by id.
    async fn find_all(&self) -> Result<Vec<TicketInfo>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<TicketInfo>, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Overwrites all fields of a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the ticket does not exist.
    async fn update(&self, id: i64, ticket: NewTicketInfo) -> Result<TicketInfo, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the ticket does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
