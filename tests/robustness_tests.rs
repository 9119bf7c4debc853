use bakeshop::application::engine::PurchaseEngine;
use bakeshop::domain::ports::ProductCatalog;
use bakeshop::domain::purchase::{DeclineReason, PurchaseOutcome, PurchaseRequest};
use bakeshop::infrastructure::in_memory::InMemoryCatalog;
use rand::Rng;
use std::time::Duration;

#[tokio::test]
async fn test_extreme_values_always_complete() {
    let engine = PurchaseEngine::with_delay(Box::new(InMemoryCatalog::builtin()), Duration::ZERO);

    let cases = [
        (i64::MIN, 1, DeclineReason::ProductNotFound),
        (i64::MAX, 1, DeclineReason::ProductNotFound),
        (1, i64::MIN, DeclineReason::InvalidQuantity),
        (1, i64::MAX, DeclineReason::InsufficientStock),
    ];

    for (product_id, quantity, expected) in cases {
        let outcome = engine
            .attempt_purchase(PurchaseRequest {
                product_id,
                quantity,
            })
            .await;

        assert_eq!(
            outcome,
            PurchaseOutcome::Declined(expected),
            "id {product_id} quantity {quantity}"
        );
    }
}

#[tokio::test]
async fn test_random_requests_never_escape_the_taxonomy() {
    let catalog = InMemoryCatalog::builtin();
    let products = catalog.list().await.unwrap();
    let engine = PurchaseEngine::with_delay(Box::new(catalog), Duration::ZERO);
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let request = PurchaseRequest {
            product_id: rng.gen_range(-10..20),
            quantity: rng.gen_range(-100..100),
        };
        let outcome = engine.attempt_purchase(request).await;

        let product = products.iter().find(|p| p.id == request.product_id);
        match outcome {
            PurchaseOutcome::Approved { total } => {
                let product = product.expect("approved purchase of an unknown product");
                assert!(request.quantity > 0);
                assert!(request.quantity <= i64::from(product.stock));
                assert_eq!(total, product.unit_price.total_for(request.quantity));
            }
            PurchaseOutcome::Declined(DeclineReason::ProductNotFound) => {
                assert!(product.is_none());
            }
            PurchaseOutcome::Declined(DeclineReason::InvalidQuantity) => {
                assert!(product.is_some());
                assert!(request.quantity <= 0);
            }
            PurchaseOutcome::Declined(DeclineReason::InsufficientStock) => {
                let product = product.expect("stock decline for an unknown product");
                assert!(request.quantity > i64::from(product.stock));
            }
            PurchaseOutcome::Declined(DeclineReason::ProcessingError(detail)) => {
                panic!("unexpected processing error: {detail}");
            }
        }
    }
}
