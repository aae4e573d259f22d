//! Entity models
//!
//! One module per entity, each with the entity struct and its draft
//! payload (the entity's domain fields minus the identifier). Wire field
//! names follow the backend's API and are mapped with serde renames.

pub mod client;
pub mod order;
pub mod order_line;
pub mod product;
pub mod supplier;
pub mod transaction;

pub use client::{Client, ClientDraft};
pub use order::{Order, OrderDraft, OrderStatus};
pub use order_line::{OrderLine, OrderLineDraft};
pub use product::{Product, ProductDraft};
pub use supplier::{Supplier, SupplierDraft};
pub use transaction::{Transaction, TransactionDraft};

use crate::types::{EntityId, UNSAVED};
use serde::{Serialize, de::DeserializeOwned};

/// An entity kind served by the backend's CRUD API.
///
/// Binds the entity to its URL path segment, a human-readable name for
/// notices and logs, and the payload type sent on create/update.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path segment under `/api/v1/`, e.g. `cliente`.
    const SEGMENT: &'static str;
    /// Display name used in notices, e.g. `Client`.
    const NAME: &'static str;

    /// Create/update request body: the domain fields without the id.
    type Draft: Serialize + Clone + Send + Sync;

    fn id(&self) -> EntityId;

    /// Copy the domain fields into a draft payload.
    fn to_draft(&self) -> Self::Draft;

    /// Rebuild an entity from an id and a draft payload.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Whether the backend has assigned this entity an identifier.
    fn is_persisted(&self) -> bool {
        self.id() != UNSAVED
    }
}
