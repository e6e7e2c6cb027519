use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

pub type ExpenseId = Uuid;

/// One logged spending event.
/// Records carry a stable id assigned at creation time; deletion always
/// resolves through the id, never through a position in a sorted view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Stable identity, generated once and persisted with the record.
    /// Files written before ids existed get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: ExpenseId,
    /// Calendar day the money was spent (no time component)
    pub date: NaiveDate,
    /// Positive magnitude, currency-agnostic
    pub amount: f64,
    pub category: Category,
    /// Free-form note, non-empty after trimming
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new record. Candidate input is validated at the service
    /// boundary before construction.
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        assert!(amount > 0.0, "Expense amount must be positive");
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            category,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn test_create_expense() {
        let expense = ExpenseRecord::new(sample_date(), 100.0, Category::Food, "Lunch");

        assert_eq!(expense.date, sample_date());
        assert_eq!(expense.amount, 100.0);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn test_each_expense_gets_its_own_id() {
        let a = ExpenseRecord::new(sample_date(), 100.0, Category::Food, "Lunch");
        let b = ExpenseRecord::new(sample_date(), 100.0, Category::Food, "Lunch");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_deserializes_legacy_record_without_id() {
        // Shape written by older versions of the expense file
        let json = r#"{
            "date": "2024-03-04",
            "amount": 100.5,
            "category": "Food",
            "description": "Lunch"
        }"#;

        let expense: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(expense.date, sample_date());
        assert_eq!(expense.amount, 100.5);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    #[should_panic(expected = "Expense amount must be positive")]
    fn test_expense_requires_positive_amount() {
        ExpenseRecord::new(sample_date(), 0.0, Category::Other, "Nothing");
    }
}
