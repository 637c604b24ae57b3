use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Unified error type for the domain, service and storage layers.
#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Expense store `{}` could not be parsed: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },
    #[error("You must enter a number (got `{0}`)")]
    InvalidNumber(String),
    #[error("Invalid number {index}: choose between 1 and {count}")]
    IndexOutOfRange { index: i64, count: usize },
    #[error("No expenses recorded yet")]
    NoExpenses,
}

impl ExpenseError {
    /// Input problems are reported and the shell carries on; everything else is fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExpenseError::InvalidNumber(_)
                | ExpenseError::IndexOutOfRange { .. }
                | ExpenseError::NoExpenses
        )
    }
}

pub type Result<T> = StdResult<T, ExpenseError>;

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_recoverable() {
        assert!(ExpenseError::InvalidNumber("abc".into()).is_recoverable());
        assert!(ExpenseError::IndexOutOfRange { index: 99, count: 2 }.is_recoverable());
        assert!(ExpenseError::NoExpenses.is_recoverable());
        assert!(!ExpenseError::Storage("disk full".into()).is_recoverable());
    }

    #[test]
    fn corrupt_store_message_names_the_file() {
        let err = ExpenseError::CorruptStore {
            path: PathBuf::from("expenses.json"),
            reason: "expected value at line 1 column 1".into(),
        };
        assert!(err.to_string().contains("expenses.json"));
    }
}
