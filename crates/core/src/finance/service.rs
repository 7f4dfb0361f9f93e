//! Finance service tying validation, storage, and aggregation together.

use fintrack_shared::types::{EntryId, UserId};

use super::aggregation::{self, CategoryStats, FinanceReport, MonthlyStat};
use super::error::FinanceError;
use super::filter::{self, DateRange, EntryQuery, FilterParams, MonthlyStatsParams};
use super::store::EntryStore;
use super::types::{EntryPayload, FinanceEntry};
use super::validation;

/// Finance service for managing a caller's entries and reports.
///
/// Every operation takes the authenticated caller and never touches entries
/// owned by anyone else.
#[derive(Debug, Clone)]
pub struct FinanceService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> FinanceService<S> {
    /// Create a new finance service over a record store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists all entries of the caller.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the store fails.
    pub async fn list(&self, caller: UserId) -> Result<Vec<FinanceEntry>, FinanceError> {
        self.store.find(&EntryQuery::owned_by(caller)).await
    }

    /// Fetches one of the caller's entries.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the entry is missing or owned by someone else.
    pub async fn get(&self, caller: UserId, id: EntryId) -> Result<FinanceEntry, FinanceError> {
        self.store
            .find_owned(caller, id)
            .await?
            .ok_or(FinanceError::NotFound)
    }

    /// Validates and stores a new entry owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the payload is rejected, `Store` if persisting fails.
    pub async fn create(
        &self,
        caller: UserId,
        payload: EntryPayload,
    ) -> Result<FinanceEntry, FinanceError> {
        let entry = validation::validate_new_entry(payload)?;
        self.store.create(caller, entry).await
    }

    /// Applies a partial update to one of the caller's entries.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for invalid fields and `NotFound` if the entry is
    /// missing or owned by someone else.
    pub async fn update(
        &self,
        caller: UserId,
        id: EntryId,
        payload: EntryPayload,
    ) -> Result<FinanceEntry, FinanceError> {
        let changes = validation::validate_changes(payload)?;
        self.get(caller, id).await?;
        self.store
            .update_owned(caller, id, changes)
            .await?
            .ok_or(FinanceError::NotFound)
    }

    /// Deletes one of the caller's entries.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the entry is missing or owned by someone else.
    pub async fn delete(&self, caller: UserId, id: EntryId) -> Result<(), FinanceError> {
        self.get(caller, id).await?;
        if self.store.delete_owned(caller, id).await? {
            Ok(())
        } else {
            Err(FinanceError::NotFound)
        }
    }

    /// Totals over all of the caller's entries.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the store fails.
    pub async fn report(&self, caller: UserId) -> Result<FinanceReport, FinanceError> {
        Ok(aggregation::summarize(&self.list(caller).await?))
    }

    /// Lists the caller's entries matching type/month/year parameters.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unparsable parameters.
    pub async fn filter(
        &self,
        caller: UserId,
        params: &FilterParams,
        current_year: i32,
    ) -> Result<Vec<FinanceEntry>, FinanceError> {
        let query = filter::build_query(caller, params, current_year)?;
        self.store.find(&query).await
    }

    /// Category breakdown over all of the caller's entries.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the store fails.
    pub async fn category_stats(&self, caller: UserId) -> Result<CategoryStats, FinanceError> {
        Ok(aggregation::category_stats(&self.list(caller).await?))
    }

    /// Twelve monthly buckets for the requested year.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if no year was given.
    pub async fn monthly_stats(
        &self,
        caller: UserId,
        params: &MonthlyStatsParams,
    ) -> Result<Vec<MonthlyStat>, FinanceError> {
        let year = filter::required_year(params)?;
        let query = match DateRange::year(year) {
            Some(range) => EntryQuery::owned_by(caller).created_within(range),
            None => EntryQuery::owned_by(caller),
        };
        let entries = self.store.find(&query).await?;
        Ok(aggregation::monthly_stats(year, &entries))
    }
}
