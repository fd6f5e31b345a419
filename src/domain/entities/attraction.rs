//! Attraction entity.

use crate::domain::types::AttractionType;

/// A tourist attraction.
///
/// Belongs to exactly one [`crate::domain::entities::Address`], has at most one
/// [`crate::domain::entities::TicketInfo`] and any number of services.
#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub attraction_type: Option<AttractionType>,
    pub address_id: i64,
    pub ticket_info_id: Option<i64>,
    /// Services offered here, ordered by id.
    pub service_ids: Vec<i64>,
}

/// Writable fields of an attraction.
///
/// On update the service links are replaced by `service_ids`; an empty list
/// removes them all.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttraction {
    pub name: String,
    pub description: Option<String>,
    pub attraction_type: Option<AttractionType>,
    pub address_id: i64,
    pub ticket_info_id: Option<i64>,
    pub service_ids: Vec<i64>,
}
