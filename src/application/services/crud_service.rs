//! The CRUD contract shared by every entity service.

use crate::error::AppError;
use async_trait::async_trait;

/// Five-operation CRUD contract.
///
/// `get_by_id`, `update` and `delete` fail with [`AppError::NotFound`] when the
/// id does not exist. `update` and `delete` check existence before writing.
#[async_trait]
pub trait CrudService: Send + Sync {
    /// Persisted record returned to callers.
    type Entity: Send;
    /// Writable fields accepted by `create` and `update`.
    type Draft: Send;

    async fn create(&self, draft: Self::Draft) -> Result<Self::Entity, AppError>;

    async fn read(&self) -> Result<Vec<Self::Entity>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Self::Entity, AppError>;

    async fn update(&self, id: i64, draft: Self::Draft) -> Result<Self::Entity, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
