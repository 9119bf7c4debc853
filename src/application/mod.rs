//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PurchaseEngine` which acts as the primary entry
//! point for validating and pricing purchase attempts against the injected
//! catalog.

pub mod engine;
