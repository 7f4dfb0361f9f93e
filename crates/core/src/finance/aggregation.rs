//! Totals, category breakdowns, and monthly series over finance entries.
//!
//! All functions are pure and read-only; callers fetch the entry set fresh
//! for every request.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::filter::DateRange;
use super::types::{Category, EntryType, FinanceEntry};

/// Income and expense totals with the resulting balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceReport {
    /// Sum of income amounts.
    pub total_incomes: Decimal,
    /// Sum of expense amounts.
    pub total_expenses: Decimal,
    /// `total_incomes - total_expenses`.
    pub balance: Decimal,
}

/// Total amount and entry count for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    /// Sum of amounts regardless of type.
    pub total: Decimal,
    /// Number of entries.
    pub count: u64,
}

/// Per-category statistics. Categories without entries are absent.
pub type CategoryStats = BTreeMap<Category, CategoryStat>;

/// One month's bucket in a yearly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    /// Month number, 1-12.
    pub month: u32,
    /// Sum of income amounts in the month.
    pub total_income: Decimal,
    /// Sum of expense amounts in the month.
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    pub balance: Decimal,
}

impl MonthlyStat {
    fn empty(month: u32) -> Self {
        Self {
            month,
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// Computes income/expense totals and the balance.
#[must_use]
pub fn summarize(entries: &[FinanceEntry]) -> FinanceReport {
    let (total_incomes, total_expenses) =
        entries
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), e| match e.entry_type {
                EntryType::Income => (inc + e.amount, exp),
                EntryType::Expense => (inc, exp + e.amount),
            });

    FinanceReport {
        total_incomes,
        total_expenses,
        balance: entries.iter().map(FinanceEntry::signed_amount).sum(),
    }
}

/// Groups entries by category.
#[must_use]
pub fn category_stats(entries: &[FinanceEntry]) -> CategoryStats {
    let mut stats = CategoryStats::new();
    for entry in entries {
        let stat = stats.entry(entry.category).or_default();
        stat.total += entry.amount;
        stat.count += 1;
    }
    stats
}

/// Buckets entries created in `year` by UTC calendar month.
///
/// Always returns twelve records ordered January to December. Entries outside
/// the year are skipped.
#[must_use]
pub fn monthly_stats(year: i32, entries: &[FinanceEntry]) -> Vec<MonthlyStat> {
    let mut buckets: Vec<MonthlyStat> = (1..=12).map(MonthlyStat::empty).collect();
    let Some(range) = DateRange::year(year) else {
        return buckets;
    };

    for entry in entries.iter().filter(|e| range.contains(e.created_at)) {
        let bucket = &mut buckets[entry.created_at.month0() as usize];
        match entry.entry_type {
            EntryType::Income => bucket.total_income += entry.amount,
            EntryType::Expense => bucket.total_expense += entry.amount,
        }
    }

    for bucket in &mut buckets {
        bucket.balance = bucket.total_income - bucket.total_expense;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use fintrack_shared::types::{EntryId, UserId};

    fn entry(amount: Decimal, entry_type: EntryType, category: Category) -> FinanceEntry {
        entry_at(amount, entry_type, category, (2024, 1, 10))
    }

    fn entry_at(
        amount: Decimal,
        entry_type: EntryType,
        category: Category,
        (y, m, d): (i32, u32, u32),
    ) -> FinanceEntry {
        let at = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        FinanceEntry {
            id: EntryId::new(),
            owner: UserId::new(),
            title: "entry".to_string(),
            amount,
            entry_type,
            category,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_summarize() {
        let entries = vec![
            entry(dec!(100), EntryType::Income, Category::Salary),
            entry(dec!(30), EntryType::Expense, Category::Food),
            entry(dec!(20), EntryType::Expense, Category::Food),
        ];
        assert_eq!(
            summarize(&entries),
            FinanceReport {
                total_incomes: dec!(100),
                total_expenses: dec!(50),
                balance: dec!(50),
            }
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), FinanceReport::default());
    }

    #[test]
    fn test_category_stats_omits_empty_categories() {
        let entries = vec![
            entry(dec!(50), EntryType::Expense, Category::Food),
            entry(dec!(30), EntryType::Expense, Category::Food),
            entry(dec!(20), EntryType::Expense, Category::Utilities),
        ];
        let stats = category_stats(&entries);

        assert_eq!(stats.len(), 2);
        assert_eq!(
            stats[&Category::Food],
            CategoryStat {
                total: dec!(80),
                count: 2
            }
        );
        assert_eq!(
            stats[&Category::Utilities],
            CategoryStat {
                total: dec!(20),
                count: 1
            }
        );
        assert!(!stats.contains_key(&Category::Salary));
    }

    #[test]
    fn test_category_stats_serializes_by_name() {
        let stats = category_stats(&[entry(dec!(5), EntryType::Income, Category::Others)]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["others"]["count"], 1);
        assert_eq!(json["others"]["total"], "5");
    }

    #[test]
    fn test_monthly_stats_single_entry() {
        let entries = vec![entry_at(
            dec!(40),
            EntryType::Income,
            Category::Salary,
            (2024, 3, 15),
        )];
        let stats = monthly_stats(2024, &entries);

        assert_eq!(stats.len(), 12);
        for (i, stat) in stats.iter().enumerate() {
            assert_eq!(stat.month as usize, i + 1);
            if stat.month == 3 {
                assert_eq!(stat.total_income, dec!(40));
                assert_eq!(stat.total_expense, Decimal::ZERO);
                assert_eq!(stat.balance, dec!(40));
            } else {
                assert_eq!(*stat, MonthlyStat::empty(stat.month));
            }
        }
    }

    #[test]
    fn test_monthly_stats_skips_other_years_and_allows_negative_balance() {
        let entries = vec![
            entry_at(dec!(10), EntryType::Income, Category::Salary, (2023, 12, 31)),
            entry_at(dec!(15), EntryType::Expense, Category::Food, (2024, 12, 31)),
            entry_at(dec!(5), EntryType::Income, Category::Salary, (2024, 12, 1)),
            entry_at(dec!(99), EntryType::Income, Category::Salary, (2025, 1, 1)),
        ];
        let stats = monthly_stats(2024, &entries);

        assert_eq!(stats[11].total_income, dec!(5));
        assert_eq!(stats[11].total_expense, dec!(15));
        assert_eq!(stats[11].balance, dec!(-10));
        assert!(stats[..11].iter().all(|s| s.balance.is_zero()));
    }

    #[test]
    fn test_monthly_stats_serialized_field_names() {
        let json = serde_json::to_value(monthly_stats(2024, &[])).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 12);
        assert_eq!(json[0]["month"], 1);
        assert!(json[0].get("totalIncome").is_some());
        assert!(json[0].get("totalExpense").is_some());
        assert!(json[0].get("balance").is_some());
    }
}
