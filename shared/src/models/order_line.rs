//! Order Line Model

use super::Resource;
use crate::types::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order line item entity
///
/// The line total is derived ([`OrderLine::line_total`]) and never part of
/// the wire payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: EntityId,
    /// Order reference
    #[serde(rename = "pedidoId")]
    pub order_id: EntityId,
    /// Product reference
    #[serde(rename = "produtoId")]
    pub product_id: EntityId,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    /// Unit price in currency units (JSON number on the wire)
    #[serde(rename = "precoUnitario", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl OrderLine {
    /// Derived line total: quantity × unit price.
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Create/update order line payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDraft {
    #[serde(rename = "pedidoId")]
    pub order_id: EntityId,
    #[serde(rename = "produtoId")]
    pub product_id: EntityId,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "precoUnitario", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl Resource for OrderLine {
    const SEGMENT: &'static str = "itemPedido";
    const NAME: &'static str = "Order line";

    type Draft = OrderLineDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> OrderLineDraft {
        OrderLineDraft {
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }

    fn from_draft(id: EntityId, draft: OrderLineDraft) -> Self {
        Self {
            id,
            order_id: draft.order_id,
            product_id: draft.product_id,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: i64, unit_price: &str) -> OrderLine {
        OrderLine {
            id: 1,
            order_id: 1,
            product_id: 1,
            quantity,
            unit_price: unit_price.parse().unwrap(),
        }
    }

    #[test]
    fn line_total_is_exact() {
        assert_eq!(line(3, "19.90").line_total(), "59.70".parse().unwrap());
        assert_eq!(line(0, "19.90").line_total(), Decimal::ZERO);
    }

    #[test]
    fn recomputing_total_is_idempotent() {
        let l = line(4, "2.25");
        assert_eq!(l.line_total(), l.line_total());
    }

    #[test]
    fn total_is_never_serialized() {
        let json = serde_json::to_string(&line(3, "19.90").to_draft()).unwrap();
        assert!(!json.contains("total"));
        assert!(json.contains("\"precoUnitario\":19.9"));
        assert!(json.contains("\"quantidade\":3"));
    }
}
