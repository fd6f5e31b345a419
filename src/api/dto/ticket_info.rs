//! DTOs for ticket endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{NOT_BLANK_REGEX, require};
use crate::domain::entities::{NewTicketInfo, TicketInfo};
use crate::error::AppError;

/// Largest value a `NUMERIC(10, 2)` price column holds.
const MAX_PRICE: Decimal = Decimal::from_parts(999_999_999, 0, 0, false, 2);

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if !price.is_sign_positive() || price.is_zero() {
        return Err(ValidationError::new("positive").with_message("Price must be greater 0".into()));
    }
    if price.normalize().scale() > 2 {
        return Err(ValidationError::new("scale")
            .with_message("Price must have at most 2 decimal places".into()));
    }
    if *price > MAX_PRICE {
        return Err(ValidationError::new("max")
            .with_message("Price must not exceed 99999999.99".into()));
    }
    Ok(())
}

/// Ticket payload for create and update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfoRequest {
    pub id: Option<i64>,

    #[schema(value_type = f64, example = 500.0)]
    #[validate(required(message = "Price cannot be null"))]
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,

    #[validate(required(message = "Currency cannot be blank"))]
    #[validate(regex(path = "*NOT_BLANK_REGEX", message = "Currency cannot be blank"))]
    #[validate(length(
        equal = 3,
        message = "Currency must consist from 3 symbols (example USD)"
    ))]
    pub currency: Option<String>,

    #[validate(required(message = "Availability cannot be null"))]
    pub availability: Option<bool>,

    #[serde(rename = "attractionID")]
    #[validate(required(message = "ID cannot be null"))]
    #[validate(range(min = 1, message = "Attraction ID must be positive"))]
    pub attraction_id: Option<i64>,
}

impl TicketInfoRequest {
    /// Converts a validated request into the writable ticket fields.
    pub fn into_draft(self) -> Result<NewTicketInfo, AppError> {
        Ok(NewTicketInfo {
            price: require(self.price, "price")?,
            currency: require(self.currency, "currency")?,
            availability: require(self.availability, "availability")?,
            attraction_id: require(self.attraction_id, "attractionID")?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfoResponse {
    pub id: i64,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub currency: String,
    pub availability: bool,
    #[serde(rename = "attractionID")]
    pub attraction_id: Option<i64>,
}

impl From<TicketInfo> for TicketInfoResponse {
    fn from(t: TicketInfo) -> Self {
        Self {
            id: t.id,
            price: t.price,
            currency: t.currency,
            availability: t.availability,
            attraction_id: t.attraction_id,
        }
    }
}
