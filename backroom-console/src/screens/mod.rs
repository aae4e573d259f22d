//! Per-entity screen specifications
//!
//! Each module instantiates the generic [`crate::Screen`] for one entity:
//! its filter parameters, sort keys, blank-draft defaults, and validation
//! rules.

pub mod clients;
pub mod order_lines;
pub mod orders;
pub mod products;
pub mod suppliers;
pub mod transactions;

pub use clients::{ClientFilter, ClientScreen, ClientsSpec};
pub use order_lines::{OrderLineFilter, OrderLineScreen, OrderLinesSpec};
pub use orders::{OrderFilter, OrderScreen, OrderSortKey, OrdersSpec};
pub use products::{ProductFilter, ProductScreen, ProductSortKey, ProductsSpec};
pub use suppliers::{SupplierFilter, SupplierScreen, SuppliersSpec};
pub use transactions::{TransactionFilter, TransactionScreen, TransactionsSpec};
