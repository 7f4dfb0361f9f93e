//! Personal finance entries and reports.
//!
//! This module provides:
//! - Entry domain types (`income`/`expense`, eight categories)
//! - Payload validation
//! - Query filter building over type, month, and year
//! - Aggregations: totals, category stats, monthly series
//! - The `EntryStore` seam implemented by the db crate
//! - `FinanceService` orchestration used by the API

pub mod aggregation;
pub mod error;
pub mod filter;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod aggregation_props;

pub use aggregation::{CategoryStat, CategoryStats, FinanceReport, MonthlyStat};
pub use error::FinanceError;
pub use filter::{DateRange, EntryQuery, FilterParams, MonthlyStatsParams};
pub use service::FinanceService;
pub use store::EntryStore;
pub use types::{Category, EntryChanges, EntryPayload, EntryType, FinanceEntry, NewEntry};
pub use validation::EntryValidationError;
