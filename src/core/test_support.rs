use std::sync::{Arc, Mutex};

use crate::core::{errors::Result, expense_book::ExpenseBook};
use crate::domain::Expense;
use crate::storage::StorageBackend;

/// In-memory store that records every save.
#[derive(Default, Clone)]
pub(crate) struct MemoryStorage {
    pub saved: Arc<Mutex<Vec<Expense>>>,
    pub saves: Arc<Mutex<usize>>,
}

impl MemoryStorage {
    pub fn saved(&self) -> Vec<Expense> {
        self.saved.lock().expect("storage lock").clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().expect("storage lock")
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Vec<Expense>> {
        Ok(self.saved())
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        *self.saved.lock().expect("storage lock") = expenses.to_vec();
        *self.saves.lock().expect("storage lock") += 1;
        Ok(())
    }
}

pub(crate) fn book_with(expenses: Vec<Expense>) -> (ExpenseBook, MemoryStorage) {
    let storage = MemoryStorage::default();
    *storage.saved.lock().expect("storage lock") = expenses;
    let book = ExpenseBook::open(Box::new(storage.clone())).expect("open book");
    (book, storage)
}
