// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use spesa::application::ExpenseService;
use spesa::domain::Category;
use tempfile::TempDir;

/// Helper to create a test service backed by a temporary expense file
pub fn test_service() -> Result<(ExpenseService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("expenses.json");
    Ok((ExpenseService::open(path), temp_dir))
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to add an expense without threading the whole argument list
pub fn add_expense(
    service: &ExpenseService,
    date: &str,
    amount: f64,
    category: Category,
    description: &str,
) -> Result<()> {
    service.add_expense(parse_date(date), amount, category, description)?;
    Ok(())
}

/// Test fixture: the dashboard example ledger
/// Lunch on Monday 2024-03-04, bus fare on Friday 2024-03-01.
pub fn dashboard_fixture(service: &ExpenseService) -> Result<()> {
    add_expense(service, "2024-03-04", 100.0, Category::Food, "Lunch")?;
    add_expense(service, "2024-03-01", 50.0, Category::Transport, "Bus")?;
    Ok(())
}
