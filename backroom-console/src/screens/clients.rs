//! Client manager screen

use crate::screen::{Screen, ScreenSpec};
use shared::{Client, UNSAVED};
use std::cmp::Ordering;

/// One search term matched case-insensitively against name or contact.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub search: String,
}

pub struct ClientsSpec;

impl ScreenSpec for ClientsSpec {
    type Entity = Client;
    type Filter = ClientFilter;
    type SortKey = ();

    fn blank() -> Client {
        Client {
            id: UNSAVED,
            name: String::new(),
            tax_id: String::new(),
            contact: String::new(),
            address: String::new(),
        }
    }

    fn matches(filter: &ClientFilter, client: &Client) -> bool {
        let term = filter.search.trim().to_lowercase();
        term.is_empty()
            || client.name.to_lowercase().contains(&term)
            || client.contact.to_lowercase().contains(&term)
    }

    fn compare(_key: (), _a: &Client, _b: &Client) -> Ordering {
        Ordering::Equal
    }
}

pub type ClientScreen = Screen<ClientsSpec>;
