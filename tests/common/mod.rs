#![allow(dead_code)]

use std::path::{Path, PathBuf};

use expense_tracker::{
    core::ExpenseBook,
    domain::Expense,
    storage::{JsonStorage, StorageBackend},
};
use tempfile::TempDir;

/// Store path inside a fresh temporary directory. Keep the guard alive for the test.
pub fn temp_store() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("expenses.json");
    (temp, path)
}

/// Opens a book over a JSON store pre-filled with `expenses`.
pub fn book_with(expenses: &[Expense]) -> (TempDir, PathBuf, ExpenseBook) {
    let (temp, path) = temp_store();
    JsonStorage::new(&path)
        .save(expenses)
        .expect("seed expense store");
    let book = ExpenseBook::open(Box::new(JsonStorage::new(&path))).expect("open book");
    (temp, path, book)
}

pub fn stored(path: &Path) -> Vec<Expense> {
    JsonStorage::new(path).load().expect("load store")
}

pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new("Food", 12.5, "2025-01-03"),
        Expense::new("Transport", 3.2, "2025-01-17"),
        Expense::new("Bills", 80.0, "2025-02-01"),
    ]
}
