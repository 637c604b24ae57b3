//! Business logic helpers for recording and editing expenses.

use crate::core::errors::ExpenseError;
use crate::core::expense_book::ExpenseBook;
use crate::domain::common::{is_valid_date, parse_amount, today};
use crate::domain::Expense;

use super::{FieldWarning, ServiceResult};

/// Raw answers for a new expense. The category is already resolved.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub category: String,
    pub amount: String,
    pub date: String,
}

/// Raw answers for an edit. Blank fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub amount: String,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub expense: Expense,
    pub warnings: Vec<FieldWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub expense: Expense,
    pub warnings: Vec<FieldWarning>,
}

/// Provides validated create/list/update/delete helpers over an [`ExpenseBook`].
pub struct ExpenseService;

impl ExpenseService {
    /// Appends a new expense and persists the book. Bad amounts become `0.0`,
    /// blank or bad dates become today; neither aborts the add.
    pub fn add(book: &mut ExpenseBook, input: NewExpense) -> ServiceResult<AddOutcome> {
        let mut warnings = Vec::new();

        let amount = match parse_amount(&input.amount) {
            Some(amount) => amount,
            None => {
                tracing::warn!(input = %input.amount, "invalid amount, storing 0");
                warnings.push(FieldWarning::AmountDefaulted);
                0.0
            }
        };

        let date = if input.date.trim().is_empty() {
            today()
        } else if is_valid_date(&input.date) {
            input.date
        } else {
            tracing::warn!(input = %input.date, "invalid date, using today");
            warnings.push(FieldWarning::DateDefaulted);
            today()
        };

        let expense = Expense::new(input.category, amount, date);
        book.push(expense.clone());
        book.save()?;
        Ok(AddOutcome { expense, warnings })
    }

    /// Every expense in insertion order, paired with its 1-based display index.
    pub fn list(book: &ExpenseBook) -> impl Iterator<Item = (usize, &Expense)> + '_ {
        book.expenses()
            .iter()
            .enumerate()
            .map(|(idx, expense)| (idx + 1, expense))
    }

    /// Looks up the expense behind a display index typed by the user.
    pub fn select<'a>(book: &'a ExpenseBook, index: &str) -> ServiceResult<(usize, &'a Expense)> {
        let position = book.position(index)?;
        Ok((position, &book.expenses()[position]))
    }

    /// Removes the expense at a display index and persists the book.
    pub fn delete(book: &mut ExpenseBook, index: &str) -> ServiceResult<Expense> {
        let position = book.position(index)?;
        let removed = book.remove(position);
        book.save()?;
        Ok(removed)
    }

    /// Applies the non-blank, valid fields of `changes` to the expense at a
    /// display index. Rejected fields are kept and reported; the book is saved
    /// even when nothing changed.
    pub fn update(
        book: &mut ExpenseBook,
        index: &str,
        changes: ExpenseChanges,
    ) -> ServiceResult<UpdateOutcome> {
        let position = book.position(index)?;
        Self::update_at(book, position, changes)
    }

    /// Same as [`ExpenseService::update`] for a position already resolved by
    /// [`ExpenseService::select`].
    pub fn update_at(
        book: &mut ExpenseBook,
        position: usize,
        changes: ExpenseChanges,
    ) -> ServiceResult<UpdateOutcome> {
        let count = book.len();
        let expense = book
            .expense_mut(position)
            .ok_or(ExpenseError::IndexOutOfRange {
                index: position as i64 + 1,
                count,
            })?;
        let mut warnings = Vec::new();

        if !changes.amount.trim().is_empty() {
            match parse_amount(&changes.amount) {
                Some(amount) => expense.amount = amount,
                None => {
                    tracing::warn!(input = %changes.amount, "invalid amount, keeping current");
                    warnings.push(FieldWarning::AmountKept);
                }
            }
        }

        if !changes.category.trim().is_empty() {
            expense.category = changes.category;
        }

        if !changes.date.trim().is_empty() {
            if is_valid_date(&changes.date) {
                expense.date = changes.date;
            } else {
                tracing::warn!(input = %changes.date, "invalid date, keeping current");
                warnings.push(FieldWarning::DateKept);
            }
        }

        let expense = expense.clone();
        book.save()?;
        Ok(UpdateOutcome { expense, warnings })
    }
}
