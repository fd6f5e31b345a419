//! Service (guide, meals, ...) service.

use async_trait::async_trait;
use std::sync::Arc;

use super::CrudService;
use crate::domain::entities::{NewService, Service};
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;

const NOT_FOUND: &str = "Service with this id doesn't exist";

/// CRUD over services offered at attractions.
pub struct ServiceService<R: ServiceRepository> {
    repository: Arc<R>,
}

impl<R: ServiceRepository> ServiceService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ServiceRepository> CrudService for ServiceService<R> {
    type Entity = Service;
    type Draft = NewService;

    async fn create(&self, draft: NewService) -> Result<Service, AppError> {
        self.repository.create(draft).await
    }

    async fn read(&self) -> Result<Vec<Service>, AppError> {
        self.repository.find_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Service, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    async fn update(&self, id: i64, draft: NewService) -> Result<Service, AppError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockServiceRepository;
    use crate::domain::types::ServiceType;

    fn draft() -> NewService {
        NewService {
            name: "Обзорная экскурсия".to_string(),
            description: None,
            service_type: Some(ServiceType::Guide),
            attraction_ids: vec![1],
        }
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockServiceRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ServiceService::new(Arc::new(mock_repo));

        let err = service.get_by_id(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Service with this id doesn't exist");
    }

    #[tokio::test]
    async fn test_update_existing() {
        let mut mock_repo = MockServiceRepository::new();
        mock_repo
            .expect_exists_by_id()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_update()
            .times(1)
            .returning(|id, d| {
                Ok(Service {
                    id,
                    name: d.name,
                    description: d.description,
                    service_type: d.service_type,
                    attraction_ids: d.attraction_ids,
                })
            });

        let service = ServiceService::new(Arc::new(mock_repo));

        let updated = service.update(4, draft()).await.unwrap();
        assert_eq!(updated.id, 4);
        assert_eq!(updated.attraction_ids, vec![1]);
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut mock_repo = MockServiceRepository::new();
        mock_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(false));
        mock_repo.expect_update().never();

        let service = ServiceService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.update(4, draft()).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut mock_repo = MockServiceRepository::new();
        mock_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(false));
        mock_repo.expect_delete_by_id().never();

        let service = ServiceService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.delete(4).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut mock_repo = MockServiceRepository::new();
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Err(AppError::internal("pool timed out")));

        let service = ServiceService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.read().await.unwrap_err(),
            AppError::Internal(_)
        ));
    }
}
