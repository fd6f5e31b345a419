//! Ticket info service.

use async_trait::async_trait;
use std::sync::Arc;

use super::CrudService;
use crate::domain::entities::{NewTicketInfo, TicketInfo};
use crate::domain::repositories::TicketInfoRepository;
use crate::error::AppError;

const NOT_FOUND: &str = "TicketInfo with this id doesn't exist";

/// CRUD over ticket details.
pub struct TicketInfoService<R: TicketInfoRepository> {
    repository: Arc<R>,
}

impl<R: TicketInfoRepository> TicketInfoService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TicketInfoRepository> CrudService for TicketInfoService<R> {
    type Entity = TicketInfo;
    type Draft = NewTicketInfo;

    async fn create(&self, draft: NewTicketInfo) -> Result<TicketInfo, AppError> {
        self.repository.create(draft).await
    }

    async fn read(&self) -> Result<Vec<TicketInfo>, AppError> {
        self.repository.find_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<TicketInfo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    async fn update(&self, id: i64, draft: NewTicketInfo) -> Result<TicketInfo, AppError> {
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
    use crate::domain::repositories::MockTicketInfoRepository;
    use rust_decimal::Decimal;

    fn ticket(id: i64) -> TicketInfo {
        TicketInfo {
            id,
            price: Decimal::new(50000, 2),
            currency: "RUB".to_string(),
            availability: true,
            attraction_id: Some(1),
        }
    }

    fn draft() -> NewTicketInfo {
        NewTicketInfo {
            price: Decimal::new(50000, 2),
            currency: "RUB".to_string(),
            availability: true,
            attraction_id: 1,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_success() {
        let mut mock_repo = MockTicketInfoRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(ticket(id))));

        let service = TicketInfoService::new(Arc::new(mock_repo));

        let found = service.get_by_id(3).await.unwrap();
        assert_eq!(found.price, Decimal::new(50000, 2));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockTicketInfoRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TicketInfoService::new(Arc::new(mock_repo));

        let err = service.get_by_id(3).await.unwrap_err();
        assert_eq!(err.to_string(), "TicketInfo with this id doesn't exist");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut mock_repo = MockTicketInfoRepository::new();
        mock_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(false));
        mock_repo.expect_update().never();

        let service = TicketInfoService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.update(3, draft()).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut mock_repo = MockTicketInfoRepository::new();
        mock_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Ok(()));

        let service = TicketInfoService::new(Arc::new(mock_repo));

        assert!(service.delete(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_unique_violation_surfaces_as_bad_request() {
        let mut mock_repo = MockTicketInfoRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::bad_request("Attraction already has ticket info")));

        let service = TicketInfoService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.create(draft()).await.unwrap_err(),
            AppError::BadRequest(_)
        ));
    }
}
