//! DTOs for service endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::require;
use crate::domain::entities::{NewService, Service};
use crate::domain::types::ServiceType;
use crate::error::AppError;

fn validate_positive_ids(ids: &[i64]) -> Result<(), ValidationError> {
    if ids.iter().all(|id| *id > 0) {
        Ok(())
    } else {
        Err(ValidationError::new("positive")
            .with_message("Attraction ID must be a positive number".into()))
    }
}

/// Service payload for create and update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: Option<i64>,

    #[validate(required(message = "Name cannot be null"))]
    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Description cannot exceed 255 characters"))]
    pub description: Option<String>,

    /// Display name (`Гид`) or code (`GUIDE`).
    #[schema(example = "Гид")]
    pub service_type: Option<String>,

    #[serde(rename = "attractionsID")]
    #[validate(required(message = "The list of attractions cannot be empty"))]
    #[validate(length(
        min = 1,
        message = "The list of attractions must contain at least one value"
    ))]
    #[validate(custom(function = "validate_positive_ids"))]
    pub attraction_ids: Option<Vec<i64>>,
}

impl ServiceRequest {
    /// Converts a validated request into the writable service fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalArgument`] for an unknown service type.
    pub fn into_draft(self) -> Result<NewService, AppError> {
        let service_type = self
            .service_type
            .as_deref()
            .map(ServiceType::from_display_name)
            .transpose()?;

        Ok(NewService {
            name: require(self.name, "name")?,
            description: self.description,
            service_type,
            attraction_ids: require(self.attraction_ids, "attractionsID")?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub service_type: Option<ServiceType>,
    #[serde(rename = "attractionsID")]
    pub attraction_ids: Vec<i64>,
}

impl From<Service> for ServiceResponse {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            service_type: s.service_type,
            attraction_ids: s.attraction_ids,
        }
    }
}
