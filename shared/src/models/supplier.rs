//! Supplier Model

use super::Resource;
use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// Supplier entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Tax identification number
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    #[serde(rename = "contato")]
    pub contact: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

/// Create/update supplier payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    #[serde(rename = "contato")]
    pub contact: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

impl Resource for Supplier {
    const SEGMENT: &'static str = "fornecedor";
    const NAME: &'static str = "Supplier";

    type Draft = SupplierDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            name: self.name.clone(),
            tax_id: self.tax_id.clone(),
            contact: self.contact.clone(),
            address: self.address.clone(),
        }
    }

    fn from_draft(id: EntityId, draft: SupplierDraft) -> Self {
        Self {
            id,
            name: draft.name,
            tax_id: draft.tax_id,
            contact: draft.contact,
            address: draft.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_wire_field_names() {
        let draft = SupplierDraft {
            name: "Moinho Sul".to_string(),
            tax_id: "12.345.678/0001-90".to_string(),
            contact: "vendas@moinho.com".to_string(),
            address: "Rua F, 50".to_string(),
        };

        let json = serde_json::to_value(&draft).unwrap();
        // The fornecedor contract names the tax field "cnpj", unlike the
        // cliente contract's "cpf_cnpj".
        assert_eq!(json["cnpj"], "12.345.678/0001-90");
        assert!(json.get("cpf_cnpj").is_none());
        assert_eq!(json["nome"], "Moinho Sul");
        assert_eq!(json["contato"], "vendas@moinho.com");
        assert_eq!(json["endereco"], "Rua F, 50");
    }

    #[test]
    fn deserializes_backend_entity() {
        let json = r#"{"id":5,"nome":"Moinho Sul","cnpj":"1","contato":"v@m.com","endereco":"Rua F"}"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.id, 5);
        assert_eq!(supplier.tax_id, "1");
        assert!(supplier.is_persisted());
    }
}
