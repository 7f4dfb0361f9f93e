//! Business rule validation for finance entry payloads.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{Category, EntryChanges, EntryPayload, EntryType, NewEntry};

/// Fractional digits kept by the amount column (`NUMERIC(19, 4)`).
pub const AMOUNT_SCALE: u32 = 4;

/// Amounts must stay strictly below this value (15 integer digits).
const AMOUNT_LIMIT: i64 = 1_000_000_000_000_000;

/// Validation errors for entry payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryValidationError {
    /// A required field is absent, null, empty, or zero.
    #[error("Field {0} is required")]
    MissingField(&'static str),

    /// `type` is not `income` or `expense`.
    #[error("Type must be income or expense, got {0:?}")]
    InvalidType(String),

    /// `category` is not one of the known categories.
    #[error(
        "Category must be one of salary, education, health, food, transportation, entertainment, utilities, others; got {0:?}"
    )]
    InvalidCategory(String),

    /// `amount` is negative or does not fit the stored precision.
    #[error("Amount must be positive, below 10^15, with at most 4 decimal places")]
    InvalidAmount,
}

/// Validates a create payload.
///
/// Fields are checked for presence first, in the order title, amount, type,
/// category, then for membership in their value sets.
///
/// # Errors
///
/// Returns the first rule the payload violates.
pub fn validate_new_entry(payload: EntryPayload) -> Result<NewEntry, EntryValidationError> {
    let title = present_text(payload.title).ok_or(EntryValidationError::MissingField("title"))?;
    let amount = payload
        .amount
        .filter(|a| !a.is_zero())
        .ok_or(EntryValidationError::MissingField("amount"))?;
    let entry_type =
        present_text(payload.entry_type).ok_or(EntryValidationError::MissingField("type"))?;
    let category =
        present_text(payload.category).ok_or(EntryValidationError::MissingField("category"))?;

    Ok(NewEntry {
        title,
        amount: check_amount(amount)?,
        entry_type: parse_entry_type(&entry_type)?,
        category: parse_category(&category)?,
    })
}

/// Validates a partial update payload.
///
/// Only fields that are present are checked, each against the same rule used
/// on create. An explicitly empty value counts as an attempt to clear a
/// required field and is rejected.
///
/// # Errors
///
/// Returns the first rule a present field violates.
pub fn validate_changes(payload: EntryPayload) -> Result<EntryChanges, EntryValidationError> {
    let title = payload
        .title
        .map(|t| present_text(Some(t)).ok_or(EntryValidationError::MissingField("title")))
        .transpose()?;
    let amount = payload
        .amount
        .map(|a| {
            if a.is_zero() {
                Err(EntryValidationError::MissingField("amount"))
            } else {
                check_amount(a)
            }
        })
        .transpose()?;
    let entry_type = payload
        .entry_type
        .map(|t| parse_entry_type(&t))
        .transpose()?;
    let category = payload
        .category
        .map(|c| parse_category(&c))
        .transpose()?;

    Ok(EntryChanges {
        title,
        amount,
        entry_type,
        category,
    })
}

/// Parses an entry type name.
///
/// # Errors
///
/// Returns `InvalidType` for anything but `income` or `expense`.
pub fn parse_entry_type(raw: &str) -> Result<EntryType, EntryValidationError> {
    EntryType::from_str(raw).map_err(|()| EntryValidationError::InvalidType(raw.to_string()))
}

/// Parses a category name.
///
/// # Errors
///
/// Returns `InvalidCategory` for names outside the fixed set.
pub fn parse_category(raw: &str) -> Result<Category, EntryValidationError> {
    Category::from_str(raw).map_err(|()| EntryValidationError::InvalidCategory(raw.to_string()))
}

fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn check_amount(amount: Decimal) -> Result<Decimal, EntryValidationError> {
    if amount.is_sign_negative()
        || amount.normalize().scale() > AMOUNT_SCALE
        || amount >= Decimal::from(AMOUNT_LIMIT)
    {
        return Err(EntryValidationError::InvalidAmount);
    }
    Ok(amount)
}
