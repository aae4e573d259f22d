//! Order line manager screen
//!
//! The displayed line total is always recomputed from quantity × unit
//! price ([`shared::OrderLine::line_total`]); it is never stored on the
//! draft and never submitted.

use crate::screen::{Screen, ScreenSpec};
use rust_decimal::Decimal;
use shared::{EntityId, OrderLine, UNSAVED};
use std::cmp::Ordering;

/// Order reference equality.
#[derive(Debug, Clone, Default)]
pub struct OrderLineFilter {
    pub order_id: Option<EntityId>,
}

pub struct OrderLinesSpec;

impl ScreenSpec for OrderLinesSpec {
    type Entity = OrderLine;
    type Filter = OrderLineFilter;
    type SortKey = ();

    fn blank() -> OrderLine {
        OrderLine {
            id: UNSAVED,
            order_id: 0,
            product_id: 0,
            quantity: 0,
            unit_price: Decimal::ZERO,
        }
    }

    fn matches(filter: &OrderLineFilter, line: &OrderLine) -> bool {
        filter.order_id.is_none_or(|id| line.order_id == id)
    }

    fn compare(_key: (), _a: &OrderLine, _b: &OrderLine) -> Ordering {
        Ordering::Equal
    }

    fn validate(draft: &mut OrderLine) -> Result<(), String> {
        if draft.quantity < 0 {
            return Err("Quantity must not be negative.".to_string());
        }
        if draft.unit_price < Decimal::ZERO {
            return Err("Unit price must not be negative.".to_string());
        }
        Ok(())
    }
}

pub type OrderLineScreen = Screen<OrderLinesSpec>;
