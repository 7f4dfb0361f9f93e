//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod finance_entry;

#[cfg(test)]
mod finance_entry_tests;

pub use finance_entry::FinanceEntryRepository;
