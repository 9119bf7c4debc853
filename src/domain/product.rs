use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` so unit prices and
/// computed totals stay exact decimal arithmetic instead of binary floats.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(pub Decimal);

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Total for `quantity` units at this unit price.
    pub fn total_for(&self, quantity: i64) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// A purchasable catalog entry.
///
/// Products are constructed once at startup and never mutated; stock is
/// checked against requests but never decremented during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique positive identifier within the catalog.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Price per unit.
    pub unit_price: Price,
    /// Units available.
    pub stock: u32,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - {} (stock: {})",
            self.id, self.name, self.unit_price, self.stock
        )
    }
}
