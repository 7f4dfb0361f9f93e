//! Property-based tests for finance aggregations and date ranges.

use chrono::{Datelike, TimeZone, Utc};
use fintrack_shared::types::{EntryId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregation::{category_stats, monthly_stats, summarize};
use super::filter::DateRange;
use super::types::{Category, EntryType, FinanceEntry};

/// Strategy to generate a positive amount from 0.01 to 1,000,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Income), Just(EntryType::Expense)]
}

fn category_strategy() -> impl Strategy<Value = Category> {
    (0usize..Category::ALL.len()).prop_map(|i| Category::ALL[i])
}

/// Entries spread over 2023-2025, one second resolution.
fn entry_strategy() -> impl Strategy<Value = FinanceEntry> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap().timestamp();
    let end = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap().timestamp();
    (
        amount_strategy(),
        entry_type_strategy(),
        category_strategy(),
        start..end,
    )
        .prop_map(|(amount, entry_type, category, ts)| {
            let at = Utc.timestamp_opt(ts, 0).unwrap();
            FinanceEntry {
                id: EntryId::new(),
                owner: UserId::new(),
                title: "generated".to_string(),
                amount,
                entry_type,
                category,
                created_at: at,
                updated_at: at,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balance is always incomes minus expenses, and the two totals
    /// partition the sum of all amounts.
    #[test]
    fn prop_report_balance(entries in prop::collection::vec(entry_strategy(), 0..50)) {
        let report = summarize(&entries);
        let total: Decimal = entries.iter().map(|e| e.amount).sum();
        let signed: Decimal = entries.iter().map(FinanceEntry::signed_amount).sum();

        prop_assert_eq!(report.balance, report.total_incomes - report.total_expenses);
        prop_assert_eq!(report.total_incomes + report.total_expenses, total);
        prop_assert_eq!(report.balance, signed);
    }

    /// Category counts add up to the number of entries, totals to the sum of
    /// amounts, and no category appears with a zero count.
    #[test]
    fn prop_category_stats_partition(entries in prop::collection::vec(entry_strategy(), 0..50)) {
        let stats = category_stats(&entries);
        let count: u64 = stats.values().map(|s| s.count).sum();
        let total: Decimal = stats.values().map(|s| s.total).sum();

        prop_assert_eq!(count, entries.len() as u64);
        prop_assert_eq!(total, entries.iter().map(|e| e.amount).sum::<Decimal>());
        prop_assert!(stats.values().all(|s| s.count > 0));
    }

    /// Monthly stats always have twelve ordered buckets whose totals match
    /// the report over the entries of that year.
    #[test]
    fn prop_monthly_stats_match_year_report(
        entries in prop::collection::vec(entry_strategy(), 0..50),
        year in 2023i32..2026,
    ) {
        let stats = monthly_stats(year, &entries);
        prop_assert_eq!(stats.len(), 12);
        for (i, stat) in stats.iter().enumerate() {
            prop_assert_eq!(stat.month as usize, i + 1);
            prop_assert_eq!(stat.balance, stat.total_income - stat.total_expense);
        }

        let in_year: Vec<FinanceEntry> = entries
            .iter()
            .filter(|e| e.created_at.year() == year)
            .cloned()
            .collect();
        let report = summarize(&in_year);
        let income: Decimal = stats.iter().map(|s| s.total_income).sum();
        let expense: Decimal = stats.iter().map(|s| s.total_expense).sum();
        prop_assert_eq!(income, report.total_incomes);
        prop_assert_eq!(expense, report.total_expenses);
    }

    /// Month ranges start on the 1st, end on the 1st of the next month, and
    /// consecutive months tile the year without gaps.
    #[test]
    fn prop_month_ranges_tile_the_year(year in 1900i32..2500, month in 1u32..=12) {
        let range = DateRange::month(year, month).unwrap();
        prop_assert_eq!(range.start.day(), 1);
        prop_assert_eq!(range.end.day(), 1);
        prop_assert!(range.start < range.end);
        prop_assert!(range.contains(range.start));
        prop_assert!(!range.contains(range.end));

        if month == 12 {
            prop_assert_eq!(range.end, DateRange::year(year + 1).unwrap().start);
        } else {
            prop_assert_eq!(range.end, DateRange::month(year, month + 1).unwrap().start);
        }
    }
}
