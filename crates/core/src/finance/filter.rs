//! Translation of report query parameters into store predicates.
//!
//! Every predicate is scoped to one owner. Date ranges are half-open UTC
//! intervals `[start, end)` computed with calendar arithmetic, so a December
//! month range ends on January 1st of the following year.

use chrono::{DateTime, Months, NaiveDate, NaiveTime, Utc};
use fintrack_shared::types::UserId;
use serde::Deserialize;

use super::error::FinanceError;
use super::types::{EntryType, FinanceEntry};
use super::validation::parse_entry_type;

/// Half-open UTC interval over `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// The calendar month `month` (1-12) of `year`.
    #[must_use]
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start.checked_add_months(Months::new(1))?;
        Some(Self::between(start, end))
    }

    /// The full calendar year.
    #[must_use]
    pub fn year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;
        Some(Self::between(start, end))
    }

    fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN).and_utc(),
            end: end.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    /// Returns true if `at` falls inside the interval.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// Predicate over one owner's stored entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    /// Only entries owned by this user match.
    pub owner: UserId,
    /// Restrict to one entry type.
    pub entry_type: Option<EntryType>,
    /// Restrict `created_at` to a range.
    pub created: Option<DateRange>,
}

impl EntryQuery {
    /// Matches every entry of `owner`.
    #[must_use]
    pub const fn owned_by(owner: UserId) -> Self {
        Self {
            owner,
            entry_type: None,
            created: None,
        }
    }

    /// Restricts the query to a date range.
    #[must_use]
    pub const fn created_within(mut self, range: DateRange) -> Self {
        self.created = Some(range);
        self
    }

    /// Evaluates the predicate against an entry.
    #[must_use]
    pub fn matches(&self, entry: &FinanceEntry) -> bool {
        entry.owner == self.owner
            && self.entry_type.is_none_or(|t| t == entry.entry_type)
            && self.created.is_none_or(|r| r.contains(entry.created_at))
    }
}

/// Raw `GET /filter` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    /// Month number, 1-12.
    pub month: Option<String>,
    /// Four-digit year.
    pub year: Option<String>,
}

/// Raw `GET /monthly-stats` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthlyStatsParams {
    /// Year to report on. Required.
    pub year: Option<String>,
}

/// Builds the filter predicate for `owner`.
///
/// `current_year` is used when a month is given without a year. A year on its
/// own selects the whole year; neither selects all dates.
///
/// # Errors
///
/// Returns `InvalidType` or `InvalidParameter` for values that do not parse.
pub fn build_query(
    owner: UserId,
    params: &FilterParams,
    current_year: i32,
) -> Result<EntryQuery, FinanceError> {
    let mut query = EntryQuery::owned_by(owner);

    if let Some(raw) = non_empty(params.entry_type.as_deref()) {
        query.entry_type = Some(parse_entry_type(raw)?);
    }

    let year = non_empty(params.year.as_deref()).map(parse_year).transpose()?;

    if let Some(raw) = non_empty(params.month.as_deref()) {
        let month = parse_month(raw)?;
        let year = year.unwrap_or(current_year);
        query.created = Some(DateRange::month(year, month).ok_or_else(|| invalid("year", year))?);
    } else if let Some(year) = year {
        query.created = Some(DateRange::year(year).ok_or_else(|| invalid("year", year))?);
    }

    Ok(query)
}

/// Extracts the mandatory year of a monthly stats request.
///
/// # Errors
///
/// Returns `MissingParameter` if absent, `InvalidParameter` if unparsable.
pub fn required_year(params: &MonthlyStatsParams) -> Result<i32, FinanceError> {
    let raw = non_empty(params.year.as_deref()).ok_or(FinanceError::MissingParameter("year"))?;
    let year = parse_year(raw)?;
    DateRange::year(year).ok_or_else(|| invalid("year", year))?;
    Ok(year)
}

fn parse_year(raw: &str) -> Result<i32, FinanceError> {
    raw.trim().parse().map_err(|_| invalid("year", raw))
}

fn parse_month(raw: &str) -> Result<u32, FinanceError> {
    match raw.trim().parse::<u32>() {
        Ok(month @ 1..=12) => Ok(month),
        _ => Err(invalid("month", raw)),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn invalid(name: &'static str, value: impl ToString) -> FinanceError {
    FinanceError::InvalidParameter {
        name,
        value: value.to_string(),
    }
}
