use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::schemas::{EntryKind, LedgerEntry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(EntryKind),
}

impl KindFilter {
    fn matches(self, kind: EntryKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => wanted == kind,
        }
    }
}

/// Resolved filter values handed over by the view layer.
///
/// The default value matches every entry; resetting the filters is the same
/// as using `LedgerFilter::default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerFilter {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub kind: KindFilter,
}

impl LedgerFilter {
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Only the calendar day of `moment` is kept.
    pub fn on_datetime(self, moment: NaiveDateTime) -> Self {
        self.on_date(moment.date())
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn of_kind(mut self, kind: EntryKind) -> Self {
        self.kind = KindFilter::Only(kind);
        self
    }

    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        if !self.kind.matches(entry.kind) {
            return false;
        }
        if let Some(date) = self.date {
            if entry.date != date {
                return false;
            }
        }
        match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => entry.category == category,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilteredLedger {
    pub matched: Vec<LedgerEntry>,
    pub total: Decimal,
}

pub fn filter_entries(entries: &[LedgerEntry], filter: &LedgerFilter) -> FilteredLedger {
    let matched: Vec<LedgerEntry> = entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .cloned()
        .collect();
    let total = sum_amounts(&matched);
    tracing::debug!(
        entries = entries.len(),
        matched = matched.len(),
        %total,
        "filtered ledger"
    );
    FilteredLedger { matched, total }
}

pub fn sum_amounts(entries: &[LedgerEntry]) -> Decimal {
    entries.iter().map(|entry| entry.amount).sum()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Decimal,
    pub percent: Decimal,
}

/// Per-category totals in first-seen order, as fed to the category pie charts.
pub fn category_breakdown(entries: &[LedgerEntry]) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Vec::new();
    for entry in entries {
        match shares.iter_mut().find(|s| s.category == entry.category) {
            Some(share) => share.total += entry.amount,
            None => shares.push(CategoryShare {
                category: entry.category.clone(),
                total: entry.amount,
                percent: Decimal::ZERO,
            }),
        }
    }
    let grand_total: Decimal = shares.iter().map(|s| s.total).sum();
    if !grand_total.is_zero() {
        for share in &mut shares {
            share.percent = share.total * Decimal::ONE_HUNDRED / grand_total;
        }
    }
    shares
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

pub fn summarize(entries: &[LedgerEntry]) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    for entry in entries {
        match entry.kind {
            EntryKind::Income => summary.income += entry.amount,
            EntryKind::Expense => summary.expenses += entry.amount,
        }
    }
    summary.balance = summary.income - summary.expenses;
    summary
}

fn expand_month_range(mut sy: i32, mut sm: u32, ey: i32, em: u32) -> Vec<(i32, u32)> {
    let mut result = Vec::new();

    while sy < ey || (sy == ey && sm <= em) {
        result.push((sy, sm));
        sm += 1;
        if sm > 12 {
            sm = 1;
            sy += 1;
        }
    }

    result
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthStats {
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
    pub savings: Decimal,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub months: Vec<MonthStats>,
    pub income: Decimal,
    pub expense: Decimal,
    pub savings: Decimal,
}

/// Income, expense and savings for every month between `start` and `end`
/// (inclusive `(year, month)` pairs). Months without entries are reported
/// with zero totals; an inverted range yields an empty report.
pub fn monthly_report(
    entries: &[LedgerEntry],
    start: (i32, u32),
    end: (i32, u32),
) -> MonthlyReport {
    let mut months: Vec<MonthStats> = expand_month_range(start.0, start.1, end.0, end.1)
        .into_iter()
        .map(|(year, month)| MonthStats {
            year,
            month,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            savings: Decimal::ZERO,
        })
        .collect();

    for entry in entries {
        let (y, m) = (entry.date.year(), entry.date.month());
        let Some(stats) = months.iter_mut().find(|s| s.year == y && s.month == m) else {
            continue;
        };
        match entry.kind {
            EntryKind::Income => stats.income += entry.amount,
            EntryKind::Expense => stats.expense += entry.amount,
        }
    }

    let mut report = MonthlyReport::default();
    for stats in &mut months {
        stats.savings = stats.income - stats.expense;
        report.income += stats.income;
        report.expense += stats.expense;
        report.savings += stats.savings;
    }
    report.months = months;
    report
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Income and expense for every day from `start` to `end` inclusive, the
/// daily counterpart of [`monthly_report`]. Days without entries are
/// reported with zero totals.
pub fn daily_report(entries: &[LedgerEntry], start: NaiveDate, end: NaiveDate) -> Vec<DayStats> {
    let mut days: Vec<DayStats> = start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|date| DayStats {
            date,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        })
        .collect();

    for entry in entries {
        if entry.date < start || entry.date > end {
            continue;
        }
        let offset = (entry.date - start).num_days() as usize;
        let Some(stats) = days.get_mut(offset) else {
            continue;
        };
        match entry.kind {
            EntryKind::Income => stats.income += entry.amount,
            EntryKind::Expense => stats.expense += entry.amount,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, d).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(
        id: &str,
        kind: EntryKind,
        date: NaiveDate,
        cents: i64,
        category: &str,
    ) -> LedgerEntry {
        LedgerEntry::new(id, kind, date, "someone", Decimal::new(cents, 2), category)
    }

    #[test]
    fn empty_category_filter_matches_everything() {
        let entries = vec![entry("1", EntryKind::Expense, day(3), 8540, "Food")];
        let filter = LedgerFilter::default().in_category("");
        assert_eq!(filter_entries(&entries, &filter).matched.len(), 1);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let entries = vec![entry("1", EntryKind::Expense, day(3), 8540, "Food")];
        let filter = LedgerFilter::default().in_category("food");
        let result = filter_entries(&entries, &filter);
        assert!(result.matched.is_empty());
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn datetime_filter_ignores_time_of_day() {
        let entries = vec![entry("1", EntryKind::Income, day(5), 50000, "Freelance")];
        let evening = day(5).and_hms_opt(21, 45, 0).unwrap();
        let filter = LedgerFilter::default().on_datetime(evening);
        assert_eq!(filter_entries(&entries, &filter).total, Decimal::new(500, 0));
    }

    #[test]
    fn kind_filter_selects_one_side() {
        let entries = vec![
            entry("1", EntryKind::Income, day(10), 350000, "Salary"),
            entry("2", EntryKind::Expense, day(9), 12050, "Food"),
            entry("3", EntryKind::Income, day(8), 40000, "Freelance"),
        ];
        let incomes = filter_entries(&entries, &LedgerFilter::default().of_kind(EntryKind::Income));
        let ids: Vec<&str> = incomes.matched.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(incomes.total, Decimal::new(3900, 0));
    }

    #[test]
    fn breakdown_merges_categories_in_first_seen_order() {
        let entries = vec![
            entry("1", EntryKind::Expense, day(1), 30000, "Rent"),
            entry("2", EntryKind::Expense, day(2), 5000, "Food"),
            entry("3", EntryKind::Expense, day(3), 5000, "Food"),
        ];
        let shares = category_breakdown(&entries);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "Rent");
        assert_eq!(shares[0].percent, Decimal::new(75, 0));
        assert_eq!(shares[1].total, Decimal::new(100, 0));
        assert_eq!(shares[1].percent, Decimal::new(25, 0));
    }

    #[test]
    fn breakdown_of_zero_amounts_has_zero_percent() {
        let entries = vec![entry("1", EntryKind::Expense, day(1), 0, "Food")];
        assert_eq!(category_breakdown(&entries)[0].percent, Decimal::ZERO);
    }

    #[test]
    fn summary_nets_income_against_expenses() {
        let entries = vec![
            entry("1", EntryKind::Income, day(1), 350000, "Salary"),
            entry("2", EntryKind::Expense, day(2), 120000, "Rent"),
        ];
        let summary = summarize(&entries);
        assert_eq!(summary.income, Decimal::new(3500, 0));
        assert_eq!(summary.expenses, Decimal::new(1200, 0));
        assert_eq!(summary.balance, Decimal::new(2300, 0));
    }

    #[test]
    fn monthly_report_fills_empty_months_across_year_end() {
        let entries = vec![
            entry("1", EntryKind::Income, ymd(2022, 11, 30), 100000, "Salary"),
            entry("2", EntryKind::Expense, ymd(2023, 1, 2), 40000, "Rent"),
            entry("3", EntryKind::Expense, ymd(2023, 3, 1), 999, "Food"),
        ];
        let report = monthly_report(&entries, (2022, 11), (2023, 1));
        let months: Vec<(i32, u32)> = report.months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(months, vec![(2022, 11), (2022, 12), (2023, 1)]);
        assert_eq!(report.months[1].savings, Decimal::ZERO);
        assert_eq!(report.months[2].savings, Decimal::new(-400, 0));
        assert_eq!(report.savings, Decimal::new(600, 0));
    }

    #[test]
    fn inverted_month_range_is_empty() {
        let report = monthly_report(&[], (2023, 5), (2023, 4));
        assert!(report.months.is_empty());
        assert_eq!(report.income, Decimal::ZERO);
    }

    #[test]
    fn daily_report_covers_every_day_in_range() {
        let entries = vec![
            entry("1", EntryKind::Expense, ymd(2023, 4, 29), 2000, "Food"),
            entry("2", EntryKind::Expense, ymd(2023, 5, 1), 3550, "Transport"),
            entry("3", EntryKind::Expense, ymd(2023, 5, 1), 450, "Food"),
            entry("4", EntryKind::Income, ymd(2023, 5, 1), 10000, "Gift"),
            entry("5", EntryKind::Expense, ymd(2023, 5, 2), 100, "Food"),
        ];
        let days = daily_report(&entries, ymd(2023, 4, 30), ymd(2023, 5, 1));
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, ymd(2023, 4, 30));
        assert_eq!(days[0].expense, Decimal::ZERO);
        assert_eq!(days[1].expense, Decimal::new(40, 0));
        assert_eq!(days[1].income, Decimal::new(100, 0));
    }

    #[test]
    fn inverted_day_range_is_empty() {
        assert!(daily_report(&[], ymd(2023, 5, 2), ymd(2023, 5, 1)).is_empty());
    }
}
