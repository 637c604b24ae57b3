pub mod category_service;
pub mod expense_service;
pub mod summary_service;

pub use category_service::{CategoryAssignment, CategoryService};
pub use expense_service::{AddOutcome, ExpenseChanges, ExpenseService, NewExpense, UpdateOutcome};
pub use summary_service::{CategoryReport, MonthlyReport, SummaryService};

use std::fmt;

use crate::core::errors::ExpenseError;
use crate::domain::FALLBACK_CATEGORY;

pub type ServiceResult<T> = Result<T, ExpenseError>;

/// Input that was rejected without aborting the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWarning {
    /// Category menu answer could not be resolved; the fallback category was used.
    CategoryDefaulted,
    /// Amount did not parse; `0.0` was stored.
    AmountDefaulted,
    /// Date did not match `YYYY-MM-DD`; today's date was stored.
    DateDefaulted,
    /// Amount did not parse; the previous value was kept.
    AmountKept,
    /// Date did not match `YYYY-MM-DD`; the previous value was kept.
    DateKept,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldWarning::CategoryDefaulted => write!(
                f,
                "Invalid choice! Default category '{FALLBACK_CATEGORY}' will be used."
            ),
            FieldWarning::AmountDefaulted => write!(f, "Invalid amount! Saving as 0."),
            FieldWarning::DateDefaulted => write!(f, "Invalid date format! Using today's date."),
            FieldWarning::AmountKept => write!(f, "Invalid amount, not updated."),
            FieldWarning::DateKept => write!(f, "Invalid date, not updated."),
        }
    }
}
