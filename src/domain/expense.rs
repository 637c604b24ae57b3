use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::format_amount;

/// Currency label shown next to every amount.
pub const CURRENCY_LABEL: &str = "USD";

/// A single recorded expense. Position in the book is its only identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            date: date.into(),
        }
    }

    /// `amount USD - date`, used where the category is already implied.
    pub fn amount_and_date(&self) -> String {
        format!(
            "{} {} - {}",
            format_amount(self.amount),
            CURRENCY_LABEL,
            self.date
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.category, self.amount_and_date())
    }
}
