use crate::core::errors::{ExpenseError, Result};
use crate::domain::{CategoryRegistry, Expense};
use crate::storage::StorageBackend;

/// Session state: the ordered expense list, the category menu and the store behind them.
///
/// The list is loaded once when the book is opened and rewritten in full by
/// [`ExpenseBook::save`] after every mutation.
pub struct ExpenseBook {
    expenses: Vec<Expense>,
    categories: CategoryRegistry,
    storage: Box<dyn StorageBackend>,
}

impl ExpenseBook {
    /// Loads the stored expenses and seeds the default categories.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let expenses = storage.load()?;
        Ok(Self {
            expenses,
            categories: CategoryRegistry::default(),
            storage,
        })
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut CategoryRegistry {
        &mut self.categories
    }

    /// Turns a 1-based display index typed by the user into a list position.
    pub fn position(&self, input: &str) -> Result<usize> {
        if self.expenses.is_empty() {
            return Err(ExpenseError::NoExpenses);
        }
        let trimmed = input.trim();
        let index: i64 = trimmed
            .parse()
            .map_err(|_| ExpenseError::InvalidNumber(trimmed.to_string()))?;
        if index < 1 || index as u64 > self.expenses.len() as u64 {
            return Err(ExpenseError::IndexOutOfRange {
                index,
                count: self.expenses.len(),
            });
        }
        Ok(index as usize - 1)
    }

    pub(crate) fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub(crate) fn remove(&mut self, position: usize) -> Expense {
        self.expenses.remove(position)
    }

    pub(crate) fn expense_mut(&mut self, position: usize) -> Option<&mut Expense> {
        self.expenses.get_mut(position)
    }

    /// Writes the whole list back to the store.
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.expenses).map_err(|err| {
            tracing::error!(error = %err, "failed to persist expenses");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::book_with;

    #[test]
    fn open_loads_stored_expenses() {
        let (book, _) = book_with(vec![Expense::new("Food", 3.0, "2025-01-01")]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.categories().len(), 5);
    }

    #[test]
    fn position_validates_display_index() {
        let (book, _) = book_with(vec![
            Expense::new("Food", 3.0, "2025-01-01"),
            Expense::new("Bills", 9.0, "2025-01-02"),
        ]);
        assert_eq!(book.position("1").unwrap(), 0);
        assert_eq!(book.position(" 2 ").unwrap(), 1);
        assert!(matches!(
            book.position("99"),
            Err(ExpenseError::IndexOutOfRange { index: 99, count: 2 })
        ));
        assert!(matches!(
            book.position("0"),
            Err(ExpenseError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            book.position("two"),
            Err(ExpenseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn position_on_empty_book_reports_no_expenses() {
        let (book, _) = book_with(Vec::new());
        assert!(matches!(book.position("1"), Err(ExpenseError::NoExpenses)));
    }

    #[test]
    fn save_writes_full_list() {
        let (mut book, storage) = book_with(Vec::new());
        book.push(Expense::new("Food", 1.0, "2025-01-01"));
        book.save().expect("save");
        assert_eq!(storage.saved().len(), 1);
        assert_eq!(storage.save_count(), 1);
    }
}
