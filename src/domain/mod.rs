pub mod category;
pub mod common;
pub mod expense;

pub use category::{CategoryRegistry, CategoryResolution, DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
pub use expense::Expense;
