pub mod errors;
pub mod expense_book;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::{ExpenseError, Result};
pub use expense_book::ExpenseBook;
