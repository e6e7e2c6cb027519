use thiserror::Error;

use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Description is mandatory")]
    EmptyDescription,

    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(f64),

    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
