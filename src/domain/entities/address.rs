//! Address entity.

/// Physical location hosting one or more attractions.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i64,
    pub building: Option<i32>,
    pub street: Option<String>,
    pub region: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Attractions located at this address, ordered by id.
    pub attraction_ids: Vec<i64>,
}

/// Writable fields of an address.
///
/// `attraction_ids` lists attractions to move to this address. Attractions not
/// listed keep their current address.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub building: Option<i32>,
    pub street: Option<String>,
    pub region: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub attraction_ids: Vec<i64>,
}
