pub mod category_handlers;
pub mod expense_handlers;
pub mod summary_handlers;
