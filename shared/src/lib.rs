//! Shared types for the Backroom back office
//!
//! Entity models, their create/update payloads, and the [`Resource`] trait
//! that binds each entity to its wire path segment.

pub mod models;
pub mod types;

// Re-exports
pub use models::{
    Client, ClientDraft, Order, OrderDraft, OrderLine, OrderLineDraft, OrderStatus, Product,
    ProductDraft, Resource, Supplier, SupplierDraft, Transaction, TransactionDraft,
};
pub use types::{EntityId, UNSAVED};
