use crate::core::errors::ExpenseError;
use crate::core::expense_book::ExpenseBook;
use crate::domain::common::year_month;
use crate::domain::Expense;

use super::ServiceResult;

/// Expenses that carry one exact category name, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport<'a> {
    pub category: String,
    pub expenses: Vec<&'a Expense>,
    pub total: f64,
}

impl CategoryReport<'_> {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: i32,
    pub total: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Case-sensitive exact match on the category field.
    pub fn by_category<'a>(book: &'a ExpenseBook, category: &str) -> CategoryReport<'a> {
        let expenses: Vec<&Expense> = book
            .expenses()
            .iter()
            .filter(|expense| expense.category == category)
            .collect();
        let total = expenses.iter().fold(0.0, |acc, expense| acc + expense.amount);
        CategoryReport {
            category: category.to_string(),
            expenses,
            total,
        }
    }

    /// Sums the amounts dated in `year`-`month`. Months are not range-checked;
    /// records with unparseable dates are skipped.
    pub fn monthly_total(book: &ExpenseBook, year: i32, month: i32) -> MonthlyReport {
        let total = book
            .expenses()
            .iter()
            .filter(|expense| {
                year_month(&expense.date)
                    .map_or(false, |(y, m)| y == year && m as i32 == month)
            })
            .fold(0.0, |acc, expense| acc + expense.amount);
        MonthlyReport { year, month, total }
    }

    /// Parses the year and month answers as plain integers.
    pub fn parse_period(year: &str, month: &str) -> ServiceResult<(i32, i32)> {
        let parse = |raw: &str| {
            let trimmed = raw.trim();
            trimmed
                .parse::<i32>()
                .map_err(|_| ExpenseError::InvalidNumber(trimmed.to_string()))
        };
        Ok((parse(year)?, parse(month)?))
    }
}
