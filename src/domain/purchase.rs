use super::product::Price;
use thiserror::Error;

/// Raw purchase input as supplied by the caller.
///
/// Not validated at construction: the id may match no product and the
/// quantity may be zero or negative. Validation is the purchase workflow's
/// job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseRequest {
    pub product_id: i64,
    pub quantity: i64,
}

/// Why a purchase attempt was declined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeclineReason {
    #[error("product does not exist")]
    ProductNotFound,
    #[error("insufficient stock")]
    InsufficientStock,
    #[error("quantity must be positive")]
    InvalidQuantity,
    #[error("processing error: {0}")]
    ProcessingError(String),
}

/// Result of a single purchase attempt.
///
/// Produced fresh per attempt and consumed immediately for display; never
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    Approved { total: Price },
    Declined(DeclineReason),
}
