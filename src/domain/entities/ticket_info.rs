//! Ticket info entity.

use rust_decimal::Decimal;

/// Admission ticket details for a single attraction.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketInfo {
    pub id: i64,
    pub price: Decimal,
    /// Three-symbol currency code, e.g. `RUB`.
    pub currency: String,
    pub availability: bool,
    pub attraction_id: Option<i64>,
}

/// Writable fields of a ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicketInfo {
    pub price: Decimal,
    pub currency: String,
    pub availability: bool,
    pub attraction_id: i64,
}
