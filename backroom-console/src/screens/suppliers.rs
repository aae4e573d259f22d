//! Supplier manager screen

use crate::screen::{Screen, ScreenSpec};
use shared::{Supplier, UNSAVED};
use std::cmp::Ordering;

/// One search term matched case-insensitively against name or contact.
#[derive(Debug, Clone, Default)]
pub struct SupplierFilter {
    pub search: String,
}

pub struct SuppliersSpec;

impl ScreenSpec for SuppliersSpec {
    type Entity = Supplier;
    type Filter = SupplierFilter;
    type SortKey = ();

    fn blank() -> Supplier {
        Supplier {
            id: UNSAVED,
            name: String::new(),
            tax_id: String::new(),
            contact: String::new(),
            address: String::new(),
        }
    }

    fn matches(filter: &SupplierFilter, supplier: &Supplier) -> bool {
        let term = filter.search.trim().to_lowercase();
        term.is_empty()
            || supplier.name.to_lowercase().contains(&term)
            || supplier.contact.to_lowercase().contains(&term)
    }

    fn compare(_key: (), _a: &Supplier, _b: &Supplier) -> Ordering {
        Ordering::Equal
    }
}

pub type SupplierScreen = Screen<SuppliersSpec>;
