//! Cash transaction manager screen

use crate::screen::{Screen, ScreenSpec};
use rust_decimal::Decimal;
use shared::{Transaction, UNSAVED};
use std::cmp::Ordering;

/// Kind equality (`"E"` / `"S"`, empty = off) and date substring.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: String,
    pub date: String,
}

pub struct TransactionsSpec;

impl ScreenSpec for TransactionsSpec {
    type Entity = Transaction;
    type Filter = TransactionFilter;
    type SortKey = ();

    fn blank() -> Transaction {
        Transaction {
            id: UNSAVED,
            date: String::new(),
            kind: String::new(),
            value: Decimal::ZERO,
            product_id: None,
            order_id: None,
        }
    }

    fn matches(filter: &TransactionFilter, transaction: &Transaction) -> bool {
        let kind_ok = filter.kind.is_empty() || transaction.kind == filter.kind;
        let date_ok = filter.date.is_empty() || transaction.date.contains(&filter.date);
        kind_ok && date_ok
    }

    fn compare(_key: (), _a: &Transaction, _b: &Transaction) -> Ordering {
        Ordering::Equal
    }

    fn validate(draft: &mut Transaction) -> Result<(), String> {
        if !draft.kind_is_valid() {
            // Matches the form behavior: the offending input is cleared.
            draft.kind.clear();
            return Err("Invalid type. Use 'E' for entry or 'S' for exit.".to_string());
        }
        if draft.value < Decimal::ZERO {
            return Err("Value must not be negative.".to_string());
        }
        Ok(())
    }
}

pub type TransactionScreen = Screen<TransactionsSpec>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::transaction::{KIND_ENTRY, KIND_EXIT};

    fn transaction(date: &str, kind: &str) -> Transaction {
        Transaction {
            id: 1,
            date: date.to_string(),
            kind: kind.to_string(),
            value: "10.00".parse().unwrap(),
            product_id: None,
            order_id: None,
        }
    }

    #[test]
    fn kind_filter_is_equality() {
        let filter = TransactionFilter {
            kind: KIND_ENTRY.to_string(),
            date: String::new(),
        };
        assert!(TransactionsSpec::matches(
            &filter,
            &transaction("2024-05-01", KIND_ENTRY),
        ));
        assert!(!TransactionsSpec::matches(
            &filter,
            &transaction("2024-05-01", KIND_EXIT),
        ));
    }

    #[test]
    fn date_filter_is_a_substring_match() {
        let filter = TransactionFilter {
            kind: String::new(),
            date: "2024-05".to_string(),
        };
        assert!(TransactionsSpec::matches(
            &filter,
            &transaction("2024-05-01", KIND_ENTRY),
        ));
        assert!(!TransactionsSpec::matches(
            &filter,
            &transaction("2024-06-01", KIND_ENTRY),
        ));
    }

    #[test]
    fn invalid_kind_is_cleared_and_rejected() {
        let mut draft = transaction("2024-05-01", "X");
        let err = TransactionsSpec::validate(&mut draft).unwrap_err();
        assert!(err.contains("'E'"));
        assert_eq!(draft.kind, "");
    }

    #[test]
    fn valid_kinds_pass() {
        assert!(TransactionsSpec::validate(&mut transaction("d", KIND_ENTRY)).is_ok());
        assert!(TransactionsSpec::validate(&mut transaction("d", KIND_EXIT)).is_ok());
    }

    #[test]
    fn negative_value_is_rejected_without_clearing_kind() {
        let mut draft = transaction("2024-05-01", KIND_ENTRY);
        draft.value = "-1".parse().unwrap();
        assert!(TransactionsSpec::validate(&mut draft).is_err());
        assert_eq!(draft.kind, KIND_ENTRY);
    }
}
