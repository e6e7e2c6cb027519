use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use super::{Category, ExpenseRecord};

/// Monday of the ISO week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// First calendar day of `day`'s month.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap()
}

/// Sum of amounts for all records dated on or after `start`.
pub fn total_since(records: &[ExpenseRecord], start: NaiveDate) -> f64 {
    records
        .iter()
        .filter(|r| r.date >= start)
        .map(|r| r.amount)
        .sum()
}

/// Per-category sums for all records dated on or after `start`.
/// Returns a map of category -> total
pub fn category_totals_since(
    records: &[ExpenseRecord],
    start: NaiveDate,
) -> HashMap<Category, f64> {
    let mut totals: HashMap<Category, f64> = HashMap::new();

    for record in records.iter().filter(|r| r.date >= start) {
        *totals.entry(record.category).or_insert(0.0) += record.amount;
    }

    totals
}

/// Category with the highest total, or `None` for an empty map.
/// Equal totals resolve to the lexicographically smaller category name, so
/// the winner never depends on map iteration order.
pub fn top_category(totals: &HashMap<Category, f64>) -> Option<Category> {
    totals
        .iter()
        .max_by(|(cat_a, total_a), (cat_b, total_b)| {
            total_a
                .partial_cmp(total_b)
                .unwrap_or(Ordering::Equal)
                .then_with(|| cat_b.as_str().cmp(cat_a.as_str()))
        })
        .map(|(category, _)| *category)
}
