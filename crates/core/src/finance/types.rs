//! Finance entry domain types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use fintrack_shared::types::{EntryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an entry adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl EntryType {
    /// All entry types in declaration order.
    pub const ALL: [Self; 2] = [Self::Income, Self::Expense];

    /// Returns the wire name of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

/// Spending or earning category of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Salary and wages.
    Salary,
    /// Tuition, courses, books.
    Education,
    /// Medical and wellness.
    Health,
    /// Groceries and eating out.
    Food,
    /// Commuting and travel.
    Transportation,
    /// Leisure.
    Entertainment,
    /// Bills: power, water, internet.
    Utilities,
    /// Anything else.
    Others,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Salary,
        Self::Education,
        Self::Health,
        Self::Food,
        Self::Transportation,
        Self::Entertainment,
        Self::Utilities,
        Self::Others,
    ];

    /// Returns the wire name of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Education => "education",
            Self::Health => "health",
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
    }
}

/// A stored income or expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// User who created the entry. Never changes.
    pub owner: UserId,
    /// Free-form label.
    pub title: String,
    /// Positive magnitude; the sign comes from `entry_type`.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Category.
    pub category: Category,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl FinanceEntry {
    /// Returns the amount signed by type (positive income, negative expense).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Income => self.amount,
            EntryType::Expense => -self.amount,
        }
    }
}

/// A validated entry ready to be stored. The owner is supplied separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Non-empty label.
    pub title: String,
    /// Positive amount.
    pub amount: Decimal,
    /// Income or expense.
    pub entry_type: EntryType,
    /// Category.
    pub category: Category,
}

/// A validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryChanges {
    /// New label.
    pub title: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New type.
    pub entry_type: Option<EntryType>,
    /// New category.
    pub category: Option<Category>,
}

impl EntryChanges {
    /// Returns true if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.amount.is_none()
            && self.entry_type.is_none()
            && self.category.is_none()
    }

    /// Applies the changes to an entry in place.
    pub fn apply_to(self, entry: &mut FinanceEntry) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(amount) = self.amount {
            entry.amount = amount;
        }
        if let Some(entry_type) = self.entry_type {
            entry.entry_type = entry_type;
        }
        if let Some(category) = self.category {
            entry.category = category;
        }
    }
}

/// Unvalidated entry payload as received from a client.
///
/// Any `owner` field in the body is ignored. Ownership comes from
/// the authenticated caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryPayload {
    /// Label.
    pub title: Option<String>,
    /// Amount, as a JSON number or decimal string.
    pub amount: Option<Decimal>,
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    /// One of the eight category names.
    pub category: Option<String>,
}
