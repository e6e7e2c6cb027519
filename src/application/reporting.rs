use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Spending snapshot for the rolling week and calendar month containing the
/// reference date. Totals are full-precision sums; formatting to two
/// decimals is left to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingReport {
    pub today: NaiveDate,
    /// Monday of the week containing `today`
    pub week_start: NaiveDate,
    /// First day of the month containing `today`
    pub month_start: NaiveDate,
    pub weekly_total: f64,
    pub monthly_total: f64,
    /// Current-month breakdown, largest total first (name breaks ties)
    pub categories: Vec<CategorySummary>,
    pub top_category: Option<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: f64,
    pub count: i64,
    pub percentage: f64,
}
