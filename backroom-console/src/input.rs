//! Form input coercion
//!
//! Numeric form fields arrive as strings. Empty input means zero (or, for
//! optional references, "not set"); negatives and garbage are rejected
//! before they reach a draft.

use rust_decimal::Decimal;
use shared::EntityId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("negative values are not allowed")]
    Negative,
}

/// Parse a monetary form field. Empty input coerces to zero.
pub fn parse_decimal(input: &str) -> Result<Decimal, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value < Decimal::ZERO {
        return Err(InputError::Negative);
    }
    Ok(value)
}

/// Parse a quantity form field. Empty input coerces to zero.
pub fn parse_quantity(input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value < 0 {
        return Err(InputError::Negative);
    }
    Ok(value)
}

/// Parse an optional foreign-key form field. Empty input means "not set".
pub fn parse_optional_id(input: &str) -> Result<Option<EntityId>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_quantity(trimmed).map(Some)
}
