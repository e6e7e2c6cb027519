use std::cmp::Ordering;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::{self, Category, ExpenseId, ExpenseRecord};
use crate::storage::Store;

use super::{AppError, CategorySummary, SpendingReport};

/// Application service providing high-level operations for the expense
/// ledger. This is the primary interface for any client (CLI, TUI, etc.).
///
/// The service is stateless over the store: every operation reads the full
/// ledger and every mutation rewrites it, so the file is the single source
/// of truth between operations.
pub struct ExpenseService {
    store: Store,
}

impl ExpenseService {
    /// Create a new service over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Open a service over the given expense file path. The file does not
    /// need to exist yet; a missing file reads as an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Store::new(path))
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record a new expense.
    /// The candidate is validated first; the ledger is untouched in memory
    /// and on disk when validation fails.
    pub fn add_expense(
        &self,
        date: NaiveDate,
        amount: f64,
        category: Category,
        description: &str,
    ) -> Result<ExpenseRecord, AppError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::EmptyDescription);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::NonPositiveAmount(amount));
        }

        let record = ExpenseRecord::new(date, amount, category, description);

        let mut expenses = self.store.load()?;
        expenses.push(record.clone());
        self.store.save(&expenses)?;

        Ok(record)
    }

    /// Delete an expense by id, preserving the relative order of the rest.
    /// Returns the removed record.
    pub fn delete_expense(&self, id: ExpenseId) -> Result<ExpenseRecord, AppError> {
        let mut expenses = self.store.load()?;

        let position = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::ExpenseNotFound(id.to_string()))?;

        let removed = expenses.remove(position);
        self.store.save(&expenses)?;

        Ok(removed)
    }

    /// List all expenses in canonical (insertion) order.
    pub fn list_expenses(&self) -> Result<Vec<ExpenseRecord>, AppError> {
        Ok(self.store.load()?)
    }

    /// Newest-first view for browsing. Positions in this view are never
    /// used to address a record; deletion goes through the id.
    pub fn list_expenses_recent_first(&self) -> Result<Vec<ExpenseRecord>, AppError> {
        let mut expenses = self.store.load()?;
        // Stable sort: same-day records keep their insertion order
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    // ========================
    // Reporting
    // ========================

    /// Compute the spending report for the week and month containing `today`.
    pub fn spending_report(&self, today: NaiveDate) -> Result<SpendingReport, AppError> {
        let expenses = self.store.load()?;

        let week_start = domain::week_start(today);
        let month_start = domain::month_start(today);

        let weekly_total = domain::total_since(&expenses, week_start);
        let monthly_total = domain::total_since(&expenses, month_start);
        let totals = domain::category_totals_since(&expenses, month_start);
        let top_category = domain::top_category(&totals);

        let mut categories: Vec<CategorySummary> = totals
            .iter()
            .map(|(&category, &total)| {
                let count = expenses
                    .iter()
                    .filter(|e| e.date >= month_start && e.category == category)
                    .count() as i64;
                let percentage = if monthly_total > 0.0 {
                    total / monthly_total * 100.0
                } else {
                    0.0
                };
                CategorySummary {
                    category,
                    total,
                    count,
                    percentage,
                }
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });

        Ok(SpendingReport {
            today,
            week_start,
            month_start,
            weekly_total,
            monthly_total,
            categories,
            top_category,
        })
    }
}
