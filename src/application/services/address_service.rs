//! Address service.

use async_trait::async_trait;
use std::sync::Arc;

use super::CrudService;
use crate::domain::entities::{Address, NewAddress};
use crate::domain::repositories::AddressRepository;
use crate::error::AppError;

const NOT_FOUND: &str = "Address with this id doesn't exist";

/// CRUD over addresses.
pub struct AddressService<R: AddressRepository> {
    repository: Arc<R>,
}

impl<R: AddressRepository> AddressService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: AddressRepository> CrudService for AddressService<R> {
    type Entity = Address;
    type Draft = NewAddress;

    async fn create(&self, draft: NewAddress) -> Result<Address, AppError> {
        self.repository.create(draft).await
    }

    async fn read(&self) -> Result<Vec<Address>, AppError> {
        self.repository.find_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Address, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    async fn update(&self, id: i64, draft: NewAddress) -> Result<Address, AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }
        self.repository.update(id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }
        self.repository.delete_by_id(id).await
    }
}
