//! Record store abstraction for finance entries.

use std::future::Future;

use fintrack_shared::types::{EntryId, UserId};

use super::error::FinanceError;
use super::filter::EntryQuery;
use super::types::{EntryChanges, FinanceEntry, NewEntry};

/// Repository trait for finance entry persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
/// Single-entry operations are scoped to an owner: an entry that exists but
/// belongs to someone else is indistinguishable from a missing one.
pub trait EntryStore: Send + Sync {
    /// Persists a new entry for `owner`, assigning its id and timestamps.
    fn create(
        &self,
        owner: UserId,
        entry: NewEntry,
    ) -> impl Future<Output = Result<FinanceEntry, FinanceError>> + Send;

    /// Returns every entry matching the query.
    fn find(
        &self,
        query: &EntryQuery,
    ) -> impl Future<Output = Result<Vec<FinanceEntry>, FinanceError>> + Send;

    /// Returns the entry if it exists and belongs to `owner`.
    fn find_owned(
        &self,
        owner: UserId,
        id: EntryId,
    ) -> impl Future<Output = Result<Option<FinanceEntry>, FinanceError>> + Send;

    /// Applies `changes` to an owned entry and returns the updated record.
    fn update_owned(
        &self,
        owner: UserId,
        id: EntryId,
        changes: EntryChanges,
    ) -> impl Future<Output = Result<Option<FinanceEntry>, FinanceError>> + Send;

    /// Deletes an owned entry. Returns false if nothing was deleted.
    fn delete_owned(
        &self,
        owner: UserId,
        id: EntryId,
    ) -> impl Future<Output = Result<bool, FinanceError>> + Send;
}
