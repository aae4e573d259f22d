//! Order Model

use super::Resource;
use crate::types::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status, with the backend's wire strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Em Processamento")]
    Processing,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in form-select order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    /// ISO date (`YYYY-MM-DD`)
    #[serde(rename = "data")]
    pub date: String,
    /// Client reference; integrity is not checked client-side
    #[serde(rename = "clienteId")]
    pub client_id: EntityId,
    pub status: OrderStatus,
    /// Order total in currency units (JSON number on the wire)
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Create/update order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "clienteId")]
    pub client_id: EntityId,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Resource for Order {
    const SEGMENT: &'static str = "pedido";
    const NAME: &'static str = "Order";

    type Draft = OrderDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            date: self.date.clone(),
            client_id: self.client_id,
            status: self.status,
            total: self.total,
        }
    }

    fn from_draft(id: EntityId, draft: OrderDraft) -> Self {
        Self {
            id,
            date: draft.date,
            client_id: draft.client_id,
            status: draft.status,
            total: draft.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_backend_wire_strings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"Pendente\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"Em Processamento\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completed).unwrap(),
            "\"Concluído\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"Cancelado\""
        );
    }

    #[test]
    fn deserializes_backend_order() {
        let json = r#"{"id":1,"data":"2024-05-01","clienteId":4,"status":"Concluído","total":120.5}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.total, "120.5".parse().unwrap());
    }

    #[test]
    fn default_status_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
