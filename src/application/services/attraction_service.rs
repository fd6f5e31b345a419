//! Attraction service with search queries.

use async_trait::async_trait;
use std::sync::Arc;

use super::CrudService;
use crate::domain::entities::{Attraction, NewAttraction};
use crate::domain::repositories::AttractionRepository;
use crate::domain::types::ServiceType;
use crate::error::AppError;

const NOT_FOUND: &str = "Attraction with this id doesn't exist";

/// CRUD over attractions plus the search endpoints.
pub struct AttractionService<R: AttractionRepository> {
    repository: Arc<R>,
}

impl<R: AttractionRepository> AttractionService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Attractions whose name contains `name`, ignoring case.
    pub async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Attraction>, AppError> {
        self.repository.find_by_name_containing(name).await
    }

    pub async fn search_by_city(&self, city: &str) -> Result<Vec<Attraction>, AppError> {
        self.repository.find_by_address_city(city).await
    }

    pub async fn search_by_region(&self, region: &str) -> Result<Vec<Attraction>, AppError> {
        self.repository.find_by_address_region(region).await
    }

    /// Attractions offering a service of the type named by `display_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalArgument`] if `display_name` is not a known service type.
    pub async fn search_by_service_type(
        &self,
        display_name: &str,
    ) -> Result<Vec<Attraction>, AppError> {
        let service_type = ServiceType::from_display_name(display_name)?;
        self.repository.find_by_service_type(service_type).await
    }
}

#[async_trait]
impl<R: AttractionRepository> CrudService for AttractionService<R> {
    type Entity = Attraction;
    type Draft = NewAttraction;

    async fn create(&self, draft: NewAttraction) -> Result<Attraction, AppError> {
        self.repository.create(draft).await
    }

    async fn read(&self) -> Result<Vec<Attraction>, AppError> {
        self.repository.find_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Attraction, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    async fn update(&self, id: i64, draft: NewAttraction) -> Result<Attraction, AppError> {
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
    use crate::domain::repositories::MockAttractionRepository;
    use crate::domain::types::AttractionType;

    fn attraction(id: i64, name: &str) -> Attraction {
        Attraction {
            id,
            name: name.to_string(),
            description: None,
            attraction_type: Some(AttractionType::Museum),
            address_id: 1,
            ticket_info_id: None,
            service_ids: vec![],
        }
    }

    fn draft() -> NewAttraction {
        NewAttraction {
            name: "Эрмитаж".to_string(),
            description: None,
            attraction_type: Some(AttractionType::Museum),
            address_id: 1,
            ticket_info_id: None,
            service_ids: vec![1, 2],
        }
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockAttractionRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AttractionService::new(Arc::new(mock_repo));

        let err = service.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Attraction with this id doesn't exist");
    }

    #[tokio::test]
    async fn test_create_passes_draft_through() {
        let mut mock_repo = MockAttractionRepository::new();
        mock_repo
            .expect_create()
            .withf(|d| d.service_ids == vec![1, 2])
            .times(1)
            .returning(|d| Ok(attraction(5, &d.name)));

        let service = AttractionService::new(Arc::new(mock_repo));

        let created = service.create(draft()).await.unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(created.name, "Эрмитаж");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut mock_repo = MockAttractionRepository::new();
        mock_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(false));
        mock_repo.expect_update().never();

        let service = AttractionService::new(Arc::new(mock_repo));

        let result = service.update(1, draft()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut mock_repo = MockAttractionRepository::new();
        mock_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(false));
        mock_repo.expect_delete_by_id().never();

        let service = AttractionService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.delete(1).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_find_by_name_containing() {
        let mut mock_repo = MockAttractionRepository::new();
        mock_repo
            .expect_find_by_name_containing()
            .withf(|fragment| fragment == "эрм")
            .times(1)
            .returning(|_| Ok(vec![attraction(1, "Эрмитаж")]));

        let service = AttractionService::new(Arc::new(mock_repo));

        let found = service.find_by_name_containing("эрм").await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_search_by_city_and_region() {
        let mut mock_repo = MockAttractionRepository::new();
        mock_repo
            .expect_find_by_address_city()
            .withf(|city| city == "Москва")
            .times(1)
            .returning(|_| Ok(vec![attraction(1, "Кремль")]));
        mock_repo
            .expect_find_by_address_region()
            .withf(|region| region == "Московская область")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = AttractionService::new(Arc::new(mock_repo));

        assert_eq!(service.search_by_city("Москва").await.unwrap().len(), 1);
        assert!(service
            .search_by_region("Московская область")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_search_by_service_type_resolves_display_name() {
        let mut mock_repo = MockAttractionRepository::new();
        mock_repo
            .expect_find_by_service_type()
            .withf(|t| *t == ServiceType::Guide)
            .times(1)
            .returning(|_| Ok(vec![attraction(1, "Эрмитаж")]));

        let service = AttractionService::new(Arc::new(mock_repo));

        let found = service.search_by_service_type("гид").await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_search_by_unknown_service_type() {
        let mut mock_repo = MockAttractionRepository::new();
        mock_repo.expect_find_by_service_type().never();

        let service = AttractionService::new(Arc::new(mock_repo));

        let err = service.search_by_service_type("Трансфер").await.unwrap_err();
        assert!(matches!(err, AppError::IllegalArgument(_)));
        assert_eq!(err.to_string(), "Enum: Unknown display name: Трансфер");
    }
}
