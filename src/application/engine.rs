use crate::domain::ports::CatalogBox;
use crate::domain::product::Product;
use crate::domain::purchase::{DeclineReason, PurchaseOutcome, PurchaseRequest};
use crate::error::Result;
use std::time::Duration;
use tracing::debug;

/// Simulated external processing time per purchase attempt.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// The purchase workflow.
///
/// `PurchaseEngine` owns the catalog and turns raw purchase requests into
/// [`PurchaseOutcome`] values. Every request that reaches
/// [`attempt_purchase`](Self::attempt_purchase) pays the simulated processing
/// delay before its outcome is known, whether it is approved or declined.
pub struct PurchaseEngine {
    catalog: CatalogBox,
    processing_delay: Duration,
}

impl PurchaseEngine {
    /// Creates an engine with the default processing delay.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The catalog to validate and price requests against.
    pub fn new(catalog: CatalogBox) -> Self {
        Self::with_delay(catalog, DEFAULT_PROCESSING_DELAY)
    }

    /// Creates an engine with a custom processing delay.
    pub fn with_delay(catalog: CatalogBox, processing_delay: Duration) -> Self {
        Self {
            catalog,
            processing_delay,
        }
    }

    /// Validates and prices a purchase request.
    ///
    /// Always completes with an outcome: catalog failures are folded into
    /// [`DeclineReason::ProcessingError`] instead of being propagated, so the
    /// caller never sees an error or a panic from this path.
    pub async fn attempt_purchase(&self, request: PurchaseRequest) -> PurchaseOutcome {
        debug!(
            product_id = request.product_id,
            quantity = request.quantity,
            "processing purchase"
        );

        // The simulated gateway call runs before any validation result is
        // observable, nonexistent products included.
        tokio::time::sleep(self.processing_delay).await;

        let product = match self.catalog.find(request.product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => return PurchaseOutcome::Declined(DeclineReason::ProductNotFound),
            Err(e) => {
                return PurchaseOutcome::Declined(DeclineReason::ProcessingError(e.to_string()));
            }
        };

        if request.quantity <= 0 {
            return PurchaseOutcome::Declined(DeclineReason::InvalidQuantity);
        }
        if i64::from(product.stock) < request.quantity {
            return PurchaseOutcome::Declined(DeclineReason::InsufficientStock);
        }

        let total = product.unit_price.total_for(request.quantity);
        debug!(%total, "purchase approved");
        PurchaseOutcome::Approved { total }
    }

    /// Catalog listing, passed through for the interactive driver.
    pub async fn products(&self) -> Result<Vec<Product>> {
        self.catalog.list().await
    }

    /// Whether a product id is present in the catalog.
    pub async fn product_exists(&self, id: i64) -> Result<bool> {
        self.catalog.exists(id).await
    }
}
