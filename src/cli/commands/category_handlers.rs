use crate::cli::output;
use crate::core::services::CategoryService;
use crate::core::ExpenseBook;

/// Prints the numbered category menu, optionally with the "new category" slot.
pub fn print_category_menu(book: &ExpenseBook, offer_new: bool) {
    output::section("Categories");
    let categories = CategoryService::list(book);
    for (idx, name) in categories.iter().enumerate() {
        output::line(format!("{} - {}", idx + 1, name));
    }
    if offer_new {
        output::line(format!(
            "{} - Add a new category",
            book.categories().new_category_slot()
        ));
    }
}
