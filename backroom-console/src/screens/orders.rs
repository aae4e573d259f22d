//! Order manager screen

use crate::screen::{Screen, ScreenSpec, SortOrder};
use rust_decimal::Decimal;
use shared::{Order, OrderStatus, UNSAVED};
use std::cmp::Ordering;

/// Date substring and status equality.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub date: String,
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSortKey {
    Date,
    Total,
}

pub struct OrdersSpec;

impl ScreenSpec for OrdersSpec {
    type Entity = Order;
    type Filter = OrderFilter;
    type SortKey = OrderSortKey;

    fn blank() -> Order {
        Order {
            id: UNSAVED,
            date: today(),
            client_id: 0,
            status: OrderStatus::Pending,
            total: Decimal::ZERO,
        }
    }

    fn matches(filter: &OrderFilter, order: &Order) -> bool {
        let date_ok = filter.date.is_empty() || order.date.contains(&filter.date);
        let status_ok = filter.status.is_none_or(|status| order.status == status);
        date_ok && status_ok
    }

    fn compare(key: OrderSortKey, a: &Order, b: &Order) -> Ordering {
        match key {
            // ISO dates compare correctly as strings
            OrderSortKey::Date => a.date.cmp(&b.date),
            OrderSortKey::Total => a.total.cmp(&b.total),
        }
    }

    fn validate(draft: &mut Order) -> Result<(), String> {
        if draft.total < Decimal::ZERO {
            return Err("Total must not be negative.".to_string());
        }
        Ok(())
    }

    fn default_sort() -> Option<(OrderSortKey, SortOrder)> {
        Some((OrderSortKey::Date, SortOrder::Descending))
    }
}

/// Today's date as `YYYY-MM-DD`, the create-dialog default.
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub type OrderScreen = Screen<OrdersSpec>;

#[cfg(test)]
mod tests {
    use super::*;

    fn order(date: &str, status: OrderStatus, total: &str) -> Order {
        Order {
            id: 1,
            date: date.to_string(),
            client_id: 1,
            status,
            total: total.parse().unwrap(),
        }
    }

    #[test]
    fn blank_draft_defaults_to_today_and_pending() {
        let draft = OrdersSpec::blank();
        assert_eq!(draft.id, UNSAVED);
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.date, today());
        assert_eq!(draft.date.len(), 10);
    }

    #[test]
    fn date_filter_is_a_substring_match() {
        let filter = OrderFilter {
            date: "2024-05".to_string(),
            status: None,
        };
        assert!(OrdersSpec::matches(
            &filter,
            &order("2024-05-10", OrderStatus::Pending, "1"),
        ));
        assert!(!OrdersSpec::matches(
            &filter,
            &order("2024-06-10", OrderStatus::Pending, "1"),
        ));
    }

    #[test]
    fn status_filter_is_equality() {
        let filter = OrderFilter {
            date: String::new(),
            status: Some(OrderStatus::Completed),
        };
        assert!(OrdersSpec::matches(
            &filter,
            &order("2024-05-10", OrderStatus::Completed, "1"),
        ));
        assert!(!OrdersSpec::matches(
            &filter,
            &order("2024-05-10", OrderStatus::Cancelled, "1"),
        ));
    }

    #[test]
    fn comparators_order_ascending() {
        let a = order("2024-05-01", OrderStatus::Pending, "5.50");
        let b = order("2024-05-02", OrderStatus::Pending, "10.00");
        assert_eq!(
            OrdersSpec::compare(OrderSortKey::Date, &a, &b),
            Ordering::Less
        );
        assert_eq!(
            OrdersSpec::compare(OrderSortKey::Total, &a, &b),
            Ordering::Less
        );
    }

    #[test]
    fn default_sort_is_newest_first() {
        assert_eq!(
            OrdersSpec::default_sort(),
            Some((OrderSortKey::Date, SortOrder::Descending))
        );
    }
}
