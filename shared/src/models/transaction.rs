//! Cash Transaction Model

use super::Resource;
use crate::types::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire value for an entry (cash in) transaction.
pub const KIND_ENTRY: &str = "E";
/// Wire value for an exit (cash out) transaction.
pub const KIND_EXIT: &str = "S";

/// Cash-flow transaction entity
///
/// `kind` is a raw wire string so a form can hold arbitrary input; the
/// transaction screen rejects anything but [`KIND_ENTRY`] / [`KIND_EXIT`]
/// before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    /// ISO date (`YYYY-MM-DD`)
    #[serde(rename = "data")]
    pub date: String,
    /// `"E"` for entry, `"S"` for exit
    #[serde(rename = "tipo")]
    pub kind: String,
    /// Amount in currency units (JSON number on the wire)
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub value: Decimal,
    /// Optional product reference
    #[serde(rename = "produtoId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<EntityId>,
    /// Optional order reference
    #[serde(rename = "pedidoId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<EntityId>,
}

impl Transaction {
    /// Whether `kind` is one of the two accepted wire values.
    pub fn kind_is_valid(&self) -> bool {
        self.kind == KIND_ENTRY || self.kind == KIND_EXIT
    }
}

/// Create/update transaction payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub value: Decimal,
    #[serde(rename = "produtoId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<EntityId>,
    #[serde(rename = "pedidoId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<EntityId>,
}

impl Resource for Transaction {
    const SEGMENT: &'static str = "transacao";
    const NAME: &'static str = "Transaction";

    type Draft = TransactionDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            date: self.date.clone(),
            kind: self.kind.clone(),
            value: self.value,
            product_id: self.product_id,
            order_id: self.order_id,
        }
    }

    fn from_draft(id: EntityId, draft: TransactionDraft) -> Self {
        Self {
            id,
            date: draft.date,
            kind: draft.kind,
            value: draft.value,
            product_id: draft.product_id,
            order_id: draft.order_id,
        }
    }
}
