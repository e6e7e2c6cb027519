use anyhow::Result;
use std::io::Write;

use crate::application::ExpenseService;

/// Exporter for converting the expense ledger to delimited text
pub struct Exporter<'a> {
    service: &'a ExpenseService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a ExpenseService) -> Self {
        Self { service }
    }

    /// Export all expenses, in canonical order, to CSV.
    /// Returns the number of data rows written; an empty ledger produces
    /// only the header row.
    pub fn export_expenses_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let expenses = self.service.list_expenses()?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["date", "amount", "category", "description"])?;

        let mut count = 0;
        for expense in &expenses {
            csv_writer.write_record([
                expense.date.to_string(),
                expense.amount.to_string(),
                expense.category.to_string(),
                expense.description.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }
}
