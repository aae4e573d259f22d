//! Client Model

use super::Resource;
use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// Client entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Tax identification number
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: String,
    /// Contact (email or phone)
    #[serde(rename = "contato")]
    pub contact: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

/// Create/update client payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: String,
    #[serde(rename = "contato")]
    pub contact: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

impl Resource for Client {
    const SEGMENT: &'static str = "cliente";
    const NAME: &'static str = "Client";

    type Draft = ClientDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> ClientDraft {
        ClientDraft {
            name: self.name.clone(),
            tax_id: self.tax_id.clone(),
            contact: self.contact.clone(),
            address: self.address.clone(),
        }
    }

    fn from_draft(id: EntityId, draft: ClientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            tax_id: draft.tax_id,
            contact: draft.contact,
            address: draft.address,
        }
    }
}
