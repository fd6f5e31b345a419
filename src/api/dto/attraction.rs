//! DTOs for attraction endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::require;
use crate::domain::entities::{Attraction, NewAttraction};
use crate::domain::types::AttractionType;
use crate::error::AppError;

/// Attraction payload for create and update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttractionRequest {
    pub id: Option<i64>,

    #[validate(required(message = "Name cannot be null"))]
    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Description cannot exceed 255 characters"))]
    pub description: Option<String>,

    /// Display name (`Музей`) or code (`MUSEUM`).
    #[schema(example = "Музей")]
    pub attraction_type: Option<String>,

    #[serde(rename = "addressID")]
    #[validate(required(message = "Address ID cannot be null"))]
    #[validate(range(min = 1, message = "Address ID must be at least 1"))]
    pub address_id: Option<i64>,

    #[serde(rename = "ticketInfoID")]
    pub ticket_info_id: Option<i64>,

    #[serde(rename = "servicesID")]
    pub service_ids: Option<Vec<i64>>,
}

impl AttractionRequest {
    /// Converts a validated request into the writable attraction fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalArgument`] for an unknown attraction type.
    pub fn into_draft(self) -> Result<NewAttraction, AppError> {
        let attraction_type = self
            .attraction_type
            .as_deref()
            .map(AttractionType::from_display_name)
            .transpose()?;

        Ok(NewAttraction {
            name: require(self.name, "name")?,
            description: self.description,
            attraction_type,
            address_id: require(self.address_id, "addressID")?,
            ticket_info_id: self.ticket_info_id,
            service_ids: self.service_ids.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttractionResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub attraction_type: Option<AttractionType>,
    #[serde(rename = "addressID")]
    pub address_id: i64,
    #[serde(rename = "ticketInfoID")]
    pub ticket_info_id: Option<i64>,
    #[serde(rename = "servicesID")]
    pub service_ids: Vec<i64>,
}

impl From<Attraction> for AttractionResponse {
    fn from(a: Attraction) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            attraction_type: a.attraction_type,
            address_id: a.address_id,
            ticket_info_id: a.ticket_info_id,
            service_ids: a.service_ids,
        }
    }
}

/// Query for `GET /api/attractions/find`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct NameQuery {
    /// Case-insensitive fragment of the attraction name.
    pub name: String,
}
