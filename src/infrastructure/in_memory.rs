use crate::domain::ports::ProductCatalog;
use crate::domain::product::{Price, Product};
use crate::error::{Result, ShopError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// An immutable in-memory product catalog.
///
/// Validated once at construction and never mutated afterwards, so lookups
/// need no synchronization even with concurrent readers.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Builds a catalog, enforcing its invariants: at least one product,
    /// positive unique ids, non-negative prices.
    pub fn try_new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(ShopError::InvalidCatalog(
                "catalog must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for product in &products {
            if product.id <= 0 {
                return Err(ShopError::InvalidCatalog(format!(
                    "product id {} is not positive",
                    product.id
                )));
            }
            if !seen.insert(product.id) {
                return Err(ShopError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.unit_price.value() < Decimal::ZERO {
                return Err(ShopError::InvalidCatalog(format!(
                    "product {} has a negative price",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// The built-in bakery catalog, used when no catalog file is given.
    pub fn builtin() -> Self {
        let products = vec![
            Product {
                id: 1,
                name: "Pastel Chocolate".to_string(),
                unit_price: Price::new(dec!(250.0)),
                stock: 10,
            },
            Product {
                id: 2,
                name: "Galletas".to_string(),
                unit_price: Price::new(dec!(80.0)),
                stock: 20,
            },
            Product {
                id: 3,
                name: "Pan Dulce".to_string(),
                unit_price: Price::new(dec!(35.0)),
                stock: 15,
            },
            Product {
                id: 4,
                name: "Flan".to_string(),
                unit_price: Price::new(dec!(120.0)),
                stock: 8,
            },
            Product {
                id: 5,
                name: "Café".to_string(),
                unit_price: Price::new(dec!(45.0)),
                stock: 30,
            },
        ];
        Self { products }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.products.iter().any(|p| p.id == id))
    }

    async fn find(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}
