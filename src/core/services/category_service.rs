use crate::core::expense_book::ExpenseBook;
use crate::domain::{CategoryResolution, FALLBACK_CATEGORY};

use super::FieldWarning;

pub struct CategoryService;

/// Category picked for a new expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAssignment {
    pub name: String,
    /// Set when the name was appended to the registry during this pick.
    pub created: bool,
    pub warning: Option<FieldWarning>,
}

impl CategoryService {
    pub fn list(book: &ExpenseBook) -> &[String] {
        book.categories().list()
    }

    /// Resolves a menu answer against the registry. Unresolvable answers map to
    /// the fallback category rather than an error.
    pub fn resolve(book: &ExpenseBook, choice: &str, allow_new: bool) -> CategoryResolution {
        book.categories().resolve(choice, allow_new)
    }

    /// Category for a filter: the selected entry, or the fallback name.
    pub fn resolve_for_filter(book: &ExpenseBook, choice: &str) -> CategoryResolution {
        Self::resolve(book, choice, false)
    }

    /// Category for a new expense. When the answer selects the "new category"
    /// slot, `ask_name` supplies the name; a blank name quietly falls back.
    pub fn assign<F, E>(
        book: &mut ExpenseBook,
        choice: &str,
        ask_name: F,
    ) -> Result<CategoryAssignment, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        let assignment = match Self::resolve(book, choice, true) {
            CategoryResolution::Selected(name) => CategoryAssignment {
                name,
                created: false,
                warning: None,
            },
            CategoryResolution::Fallback(name) => {
                tracing::warn!(choice, "unresolvable category choice");
                CategoryAssignment {
                    name,
                    created: false,
                    warning: Some(FieldWarning::CategoryDefaulted),
                }
            }
            CategoryResolution::CreateNew => {
                let raw = ask_name()?;
                match book.categories_mut().add(&raw) {
                    Some(name) => CategoryAssignment {
                        name,
                        created: true,
                        warning: None,
                    },
                    None => CategoryAssignment {
                        name: FALLBACK_CATEGORY.to_string(),
                        created: false,
                        warning: None,
                    },
                }
            }
        };
        Ok(assignment)
    }
}
