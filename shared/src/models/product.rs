//! Product Model

use super::Resource;
use crate::types::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Unit price in currency units (JSON number on the wire)
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Stock quantity
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    /// Optional image reference
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Supplier reference; integrity is not checked client-side
    #[serde(rename = "fornecedorId")]
    pub supplier_id: EntityId,
}

/// Create/update product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "fornecedorId")]
    pub supplier_id: EntityId,
}

impl Resource for Product {
    const SEGMENT: &'static str = "produto";
    const NAME: &'static str = "Product";

    type Draft = ProductDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
            image: self.image.clone(),
            supplier_id: self.supplier_id,
        }
    }

    fn from_draft(id: EntityId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            quantity: draft.quantity,
            image: draft.image,
            supplier_id: draft.supplier_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_a_json_number_on_the_wire() {
        let draft = ProductDraft {
            name: "Coffee".to_string(),
            description: "500g".to_string(),
            price: "19.90".parse().unwrap(),
            quantity: 12,
            image: None,
            supplier_id: 2,
        };

        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"preco\":19.9"));
        assert!(!json.contains("imagem"));

        let back: ProductDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back.price, draft.price);
    }
}
