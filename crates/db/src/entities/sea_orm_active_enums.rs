//! `SeaORM` active enums backed by `PostgreSQL` enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use fintrack_core::finance::{Category, EntryType};

/// `finance_entry_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "finance_entry_type")]
pub enum FinanceEntryType {
    #[sea_orm(string_value = "income")]
    Income,
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// `finance_category` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "finance_category")]
pub enum FinanceCategory {
    #[sea_orm(string_value = "salary")]
    Salary,
    #[sea_orm(string_value = "education")]
    Education,
    #[sea_orm(string_value = "health")]
    Health,
    #[sea_orm(string_value = "food")]
    Food,
    #[sea_orm(string_value = "transportation")]
    Transportation,
    #[sea_orm(string_value = "entertainment")]
    Entertainment,
    #[sea_orm(string_value = "utilities")]
    Utilities,
    #[sea_orm(string_value = "others")]
    Others,
}

impl From<EntryType> for FinanceEntryType {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::Income => Self::Income,
            EntryType::Expense => Self::Expense,
        }
    }
}

impl From<FinanceEntryType> for EntryType {
    fn from(value: FinanceEntryType) -> Self {
        match value {
            FinanceEntryType::Income => Self::Income,
            FinanceEntryType::Expense => Self::Expense,
        }
    }
}

impl From<Category> for FinanceCategory {
    fn from(value: Category) -> Self {
        match value {
            Category::Salary => Self::Salary,
            Category::Education => Self::Education,
            Category::Health => Self::Health,
            Category::Food => Self::Food,
            Category::Transportation => Self::Transportation,
            Category::Entertainment => Self::Entertainment,
            Category::Utilities => Self::Utilities,
            Category::Others => Self::Others,
        }
    }
}

impl From<FinanceCategory> for Category {
    fn from(value: FinanceCategory) -> Self {
        match value {
            FinanceCategory::Salary => Self::Salary,
            FinanceCategory::Education => Self::Education,
            FinanceCategory::Health => Self::Health,
            FinanceCategory::Food => Self::Food,
            FinanceCategory::Transportation => Self::Transportation,
            FinanceCategory::Entertainment => Self::Entertainment,
            FinanceCategory::Utilities => Self::Utilities,
            FinanceCategory::Others => Self::Others,
        }
    }
}
