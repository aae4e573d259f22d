//! Product manager screen

use crate::screen::{Screen, ScreenSpec};
use rust_decimal::Decimal;
use shared::{EntityId, Product, UNSAVED};
use std::cmp::Ordering;

/// Name substring (case-insensitive) and supplier equality.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: String,
    pub supplier_id: Option<EntityId>,
}

/// The product list sorts by price only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortKey {
    Price,
}

pub struct ProductsSpec;

impl ScreenSpec for ProductsSpec {
    type Entity = Product;
    type Filter = ProductFilter;
    type SortKey = ProductSortKey;

    fn blank() -> Product {
        Product {
            id: UNSAVED,
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            quantity: 0,
            image: None,
            supplier_id: 0,
        }
    }

    fn matches(filter: &ProductFilter, product: &Product) -> bool {
        let name_ok = filter.name.trim().is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&filter.name.trim().to_lowercase());
        let supplier_ok = filter
            .supplier_id
            .is_none_or(|id| product.supplier_id == id);
        name_ok && supplier_ok
    }

    fn compare(key: ProductSortKey, a: &Product, b: &Product) -> Ordering {
        match key {
            ProductSortKey::Price => a.price.cmp(&b.price),
        }
    }

    fn validate(draft: &mut Product) -> Result<(), String> {
        if draft.price < Decimal::ZERO {
            return Err("Price must not be negative.".to_string());
        }
        if draft.quantity < 0 {
            return Err("Quantity must not be negative.".to_string());
        }
        Ok(())
    }
}

pub type ProductScreen = Screen<ProductsSpec>;

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: &str, supplier_id: EntityId) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            description: String::new(),
            price: price.parse().unwrap(),
            quantity: 1,
            image: None,
            supplier_id,
        }
    }

    #[test]
    fn filters_combine_as_a_conjunction() {
        let filter = ProductFilter {
            name: "cof".to_string(),
            supplier_id: Some(2),
        };
        assert!(ProductsSpec::matches(&filter, &product("Coffee", "10", 2)));
        assert!(!ProductsSpec::matches(&filter, &product("Coffee", "10", 3)));
        assert!(!ProductsSpec::matches(&filter, &product("Tea", "10", 2)));
    }

    #[test]
    fn price_comparator_orders_ascending() {
        let cheap = product("A", "5.50", 1);
        let dear = product("B", "10.00", 1);
        assert_eq!(
            ProductsSpec::compare(ProductSortKey::Price, &cheap, &dear),
            Ordering::Less
        );
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut draft = product("A", "1.00", 1);
        draft.price = "-0.01".parse().unwrap();
        assert!(ProductsSpec::validate(&mut draft).is_err());
    }

    #[test]
    fn negative_quantity_fails_validation() {
        let mut draft = product("A", "1.00", 1);
        draft.quantity = -1;
        assert!(ProductsSpec::validate(&mut draft).is_err());
    }
}
