use crate::cli::commands::category_handlers::print_category_menu;
use crate::cli::core::CommandResult;
use crate::cli::io::{ask, LineSource};
use crate::cli::output;
use crate::core::services::{CategoryService, SummaryService};
use crate::core::ExpenseBook;
use crate::domain::common::format_total;
use crate::domain::expense::CURRENCY_LABEL;
use crate::domain::FALLBACK_CATEGORY;

pub fn handle_monthly_total(book: &ExpenseBook, input: &mut dyn LineSource) -> CommandResult {
    let year = ask(input, "Year (e.g., 2025): ")?;
    let month = ask(input, "Month (1-12): ")?;
    let total = match SummaryService::parse_period(&year, &month) {
        Ok((year, month)) => SummaryService::monthly_total(book, year, month).total,
        Err(err) => {
            tracing::warn!(%year, %month, "non-numeric period");
            output::warning(err);
            0.0
        }
    };
    output::success(format!(
        "Total expenses for {}-{}: {} {}",
        year.trim(),
        month.trim(),
        format_total(total),
        CURRENCY_LABEL
    ));
    Ok(())
}

pub fn handle_filter_by_category(book: &ExpenseBook, input: &mut dyn LineSource) -> CommandResult {
    print_category_menu(book, false);
    let choice = ask(input, "Select category number to view: ")?;
    let resolution = CategoryService::resolve_for_filter(book, &choice);
    if resolution.is_fallback() {
        output::warning(format!(
            "Invalid choice! Defaulting to '{FALLBACK_CATEGORY}'."
        ));
    }
    let category = resolution.into_name();

    let report = SummaryService::by_category(book, &category);
    if report.is_empty() {
        output::info(format!("No expenses recorded in '{category}' category."));
        return Ok(());
    }
    output::section(format!("Expenses in '{category}'"));
    for (idx, expense) in report.expenses.iter().enumerate() {
        output::line(format!("{}. {}", idx + 1, expense.amount_and_date()));
    }
    output::success(format!(
        "Total spent in '{}': {} {}",
        category,
        format_total(report.total),
        CURRENCY_LABEL
    ));
    Ok(())
}
