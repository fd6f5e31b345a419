//! Service entity.

use crate::domain::types::ServiceType;

/// Something offered to visitors (a guide, meals, an excursion) at one or more
/// attractions.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub service_type: Option<ServiceType>,
    /// Attractions offering this service, ordered by id.
    pub attraction_ids: Vec<i64>,
}

/// Writable fields of a service. `attraction_ids` replaces existing links.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub service_type: Option<ServiceType>,
    pub attraction_ids: Vec<i64>,
}
