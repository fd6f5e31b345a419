//! Repository trait for addresses.

use crate::domain::entities::{Address, NewAddress};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for addresses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAddressRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Inserts an address and moves the listed attractions to it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if a listed attraction vanished meanwhile.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_address: NewAddress) -> Result<Address, AppError>;

    /// Lists all addresses ordered by id.
    async fn find_all(&self) -> Result<Vec<Address>, AppError>;

    /// Finds an address by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Address>, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Overwrites all fields of an address and moves the listed attractions to it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the address does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, address: NewAddress) -> Result<Address, AppError>;

    /// Deletes an address together with its attractions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the address does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
