//! Transaction data aggregation and pivoting for charts.
//!
//! Dates are stored as raw text and only become temporal values here: rows
//! whose date text does not parse as `YYYY-MM-DD` are skipped, never
//! surfaced as errors.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::transaction::Transaction;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LABEL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day]");

/// Parse stored date text, returning `None` for anything that is not a
/// `YYYY-MM-DD` calendar date.
fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, DATE_FORMAT).ok()
}

/// A table of summed amounts keyed by date (rows) and category (columns).
///
/// Every date present in the data carries an entry for every category present
/// in the data, zero-filled where no transactions exist for the combination.
/// Categories that never occur in the data do not appear at all.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    /// The unique dates present in the data, in chronological order.
    pub dates: Vec<Date>,
    /// The unique categories present in the data, in alphabetical order.
    pub categories: Vec<String>,
    /// Summed amounts, one row per date with one value per category.
    pub values: Vec<Vec<f64>>,
}

impl PivotTable {
    /// Whether the table holds any data at all.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The column of summed amounts for the category at `category_index`,
    /// one value per date.
    pub fn column(&self, category_index: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[category_index]).collect()
    }

    /// Date labels formatted like "Mar 28", in row order.
    pub fn date_labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|date| date.format(LABEL_FORMAT).unwrap())
            .collect()
    }
}

/// Pivot transactions into summed amounts by (date, category).
pub fn pivot_by_date_and_category(transactions: &[Transaction]) -> PivotTable {
    let mut dates = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut sums: HashMap<(Date, String), f64> = HashMap::new();

    for transaction in transactions {
        let Some(date) = parse_date(&transaction.date) else {
            continue;
        };

        dates.insert(date);
        categories.insert(transaction.category.clone());
        *sums
            .entry((date, transaction.category.clone()))
            .or_insert(0.0) += transaction.amount;
    }

    let dates: Vec<Date> = dates.into_iter().collect();
    let categories: Vec<String> = categories.into_iter().collect();

    let values = dates
        .iter()
        .map(|date| {
            categories
                .iter()
                .map(|category| {
                    sums.get(&(*date, category.clone()))
                        .copied()
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    PivotTable {
        dates,
        categories,
        values,
    }
}

/// A calendar period used to filter transactions for the pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// A calendar month number, 1 through 12.
    Month(u8),
    /// An ISO 8601 week number, 1 through 52.
    Week(u8),
}

impl Period {
    fn contains(self, date: Date) -> bool {
        match self {
            Period::Month(month) => u8::from(date.month()) == month,
            Period::Week(week) => date.iso_week() == week,
        }
    }
}

/// Sum amounts by category for the transactions whose date falls in `period`.
///
/// Categories are returned in alphabetical order. Rows with unparseable
/// dates are skipped like everywhere else in the aggregation.
pub fn category_totals(transactions: &[Transaction], period: Period) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for transaction in transactions {
        let Some(date) = parse_date(&transaction.date) else {
            continue;
        };

        if !period.contains(date) {
            continue;
        }

        *totals.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
    }

    totals.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        chart::pivot::{Period, category_totals, pivot_by_date_and_category},
        transaction::Transaction,
    };

    fn create_test_transaction(amount: f64, category: &str, date: &str) -> Transaction {
        Transaction {
            id: 0,
            description: "test".to_owned(),
            amount,
            category: category.to_owned(),
            date: date.to_owned(),
        }
    }

    #[test]
    fn pivot_of_empty_input_is_empty() {
        let pivot = pivot_by_date_and_category(&[]);

        assert!(pivot.is_empty());
        assert_eq!(pivot.dates, vec![]);
        assert_eq!(pivot.categories, Vec::<String>::new());
        assert_eq!(pivot.values, Vec::<Vec<f64>>::new());
    }

    #[test]
    fn pivot_sums_amounts_in_same_bucket() {
        let transactions = vec![
            create_test_transaction(100.0, "Food", "2025-03-28"),
            create_test_transaction(50.0, "Food", "2025-03-28"),
        ];

        let pivot = pivot_by_date_and_category(&transactions);

        assert_eq!(pivot.dates, vec![date!(2025 - 03 - 28)]);
        assert_eq!(pivot.categories, vec!["Food"]);
        assert_eq!(pivot.values, vec![vec![150.0]]);
    }

    #[test]
    fn pivot_zero_fills_missing_combinations() {
        let transactions = vec![
            create_test_transaction(100.0, "Food", "2025-03-28"),
            create_test_transaction(40.0, "Housing", "2025-03-29"),
        ];

        let pivot = pivot_by_date_and_category(&transactions);

        assert_eq!(
            pivot.dates,
            vec![date!(2025 - 03 - 28), date!(2025 - 03 - 29)]
        );
        assert_eq!(pivot.categories, vec!["Food", "Housing"]);
        assert_eq!(pivot.values, vec![vec![100.0, 0.0], vec![0.0, 40.0]]);
    }

    #[test]
    fn pivot_has_no_spurious_categories() {
        let transactions = vec![create_test_transaction(100.0, "Food", "2025-03-28")];

        let pivot = pivot_by_date_and_category(&transactions);

        assert_eq!(pivot.categories, vec!["Food"]);
    }

    #[test]
    fn pivot_skips_unparseable_dates() {
        let transactions = vec![
            create_test_transaction(100.0, "Food", "2025-03-28"),
            create_test_transaction(50.0, "Food", "yesterday"),
            create_test_transaction(25.0, "Food", "28/03/2025"),
        ];

        let pivot = pivot_by_date_and_category(&transactions);

        assert_eq!(pivot.dates, vec![date!(2025 - 03 - 28)]);
        assert_eq!(pivot.values, vec![vec![100.0]]);
    }

    #[test]
    fn pivot_column_follows_date_order() {
        let transactions = vec![
            create_test_transaction(40.0, "Food", "2025-03-29"),
            create_test_transaction(100.0, "Food", "2025-03-28"),
        ];

        let pivot = pivot_by_date_and_category(&transactions);

        assert_eq!(pivot.column(0), vec![100.0, 40.0]);
    }

    #[test]
    fn date_labels_use_short_month_and_day() {
        let transactions = vec![create_test_transaction(1.0, "Food", "2025-03-28")];

        let pivot = pivot_by_date_and_category(&transactions);

        assert_eq!(pivot.date_labels(), vec!["Mar 28"]);
    }

    #[test]
    fn category_totals_filters_by_month() {
        let transactions = vec![
            create_test_transaction(100.0, "Food", "2025-03-28"),
            create_test_transaction(60.0, "Food", "2025-03-30"),
            create_test_transaction(999.0, "Food", "2025-04-01"),
            create_test_transaction(999.0, "Housing", "2025-02-28"),
        ];

        let totals = category_totals(&transactions, Period::Month(3));

        assert_eq!(totals, vec![("Food".to_owned(), 160.0)]);
    }

    #[test]
    fn category_totals_filters_by_iso_week() {
        // 2025-03-28 is a Friday in ISO week 13.
        let transactions = vec![
            create_test_transaction(100.0, "Food", "2025-03-28"),
            create_test_transaction(50.0, "Shopping", "2025-03-24"),
            create_test_transaction(999.0, "Food", "2025-04-07"),
        ];

        let totals = category_totals(&transactions, Period::Week(13));

        assert_eq!(
            totals,
            vec![("Food".to_owned(), 100.0), ("Shopping".to_owned(), 50.0)]
        );
    }

    #[test]
    fn category_totals_of_empty_period_is_empty() {
        let transactions = vec![create_test_transaction(100.0, "Food", "2025-03-28")];

        let totals = category_totals(&transactions, Period::Month(12));

        assert_eq!(totals, vec![]);
    }
}
