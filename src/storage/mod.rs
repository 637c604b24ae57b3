pub mod json_backend;

use crate::{core::errors::ExpenseError, domain::Expense};

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Abstraction over persistence backends holding the ordered expense list.
pub trait StorageBackend: Send + Sync {
    /// Loads every stored expense; a store that does not exist yet yields an empty list.
    fn load(&self) -> Result<Vec<Expense>>;
    /// Replaces the stored list with `expenses`.
    fn save(&self, expenses: &[Expense]) -> Result<()>;
}

pub use json_backend::JsonStorage;
