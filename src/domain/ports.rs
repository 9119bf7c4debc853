use super::product::Product;
use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to the product catalog.
///
/// `exists` must agree with `find` for every integer id, including zero and
/// negative values.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;
    async fn exists(&self, id: i64) -> Result<bool>;
    async fn find(&self, id: i64) -> Result<Option<Product>>;
}

pub type CatalogBox = Box<dyn ProductCatalog>;
