//! DTOs for address endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{NOT_BLANK_REGEX, require};
use crate::domain::entities::{Address, NewAddress};
use crate::error::AppError;

/// Address payload for create and update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    /// Required on update, ignored on create.
    pub id: Option<i64>,

    #[validate(range(min = 1, message = "Building number must be at least 1"))]
    pub building: Option<i32>,

    #[validate(length(max = 100, message = "Street name must be less than 100 characters"))]
    pub street: Option<String>,

    #[validate(required(message = "Region cannot be blank"))]
    #[validate(regex(path = "*NOT_BLANK_REGEX", message = "Region cannot be blank"))]
    #[validate(length(max = 50, message = "Region name must be less than 50 characters"))]
    pub region: Option<String>,

    #[validate(required(message = "City cannot be blank"))]
    #[validate(regex(path = "*NOT_BLANK_REGEX", message = "City cannot be blank"))]
    #[validate(length(max = 50, message = "City name must be less than 50 characters"))]
    pub city: Option<String>,

    #[validate(required(message = "Latitude cannot be null"))]
    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "Latitude must be between -90 and 90"
    ))]
    pub latitude: Option<f64>,

    #[validate(required(message = "Longitude cannot be null"))]
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,

    /// Attractions to move to this address.
    #[serde(rename = "attractionID")]
    pub attraction_ids: Option<Vec<i64>>,
}

impl AddressRequest {
    /// Converts a validated request into the writable address fields.
    pub fn into_draft(self) -> Result<NewAddress, AppError> {
        Ok(NewAddress {
            building: self.building,
            street: self.street,
            region: require(self.region, "region")?,
            city: require(self.city, "city")?,
            latitude: require(self.latitude, "latitude")?,
            longitude: require(self.longitude, "longitude")?,
            attraction_ids: self.attraction_ids.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub id: i64,
    pub building: Option<i32>,
    pub street: Option<String>,
    pub region: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "attractionID")]
    pub attraction_ids: Vec<i64>,
}

impl From<Address> for AddressResponse {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            building: a.building,
            street: a.street,
            region: a.region,
            city: a.city,
            latitude: a.latitude,
            longitude: a.longitude,
            attraction_ids: a.attraction_ids,
        }
    }
}
