use crate::cli::commands::category_handlers::print_category_menu;
use crate::cli::core::CommandResult;
use crate::cli::io::{ask, LineSource};
use crate::cli::output;
use crate::core::services::{CategoryService, ExpenseChanges, ExpenseService, NewExpense};
use crate::core::ExpenseBook;
use crate::domain::common::format_amount;
use crate::domain::expense::CURRENCY_LABEL;

pub fn handle_add(book: &mut ExpenseBook, input: &mut dyn LineSource) -> CommandResult {
    print_category_menu(book, true);
    let choice = ask(input, "Select category (number): ")?;
    let assignment =
        CategoryService::assign(book, &choice, || ask(&mut *input, "New category name: "))?;
    if assignment.created {
        output::success(format!("'{}' category added!", assignment.name));
    }
    if let Some(warning) = assignment.warning {
        output::warning(warning);
    }

    let amount = ask(input, &format!("Amount ({CURRENCY_LABEL}): "))?;
    let date = ask(input, "Date (YYYY-MM-DD, leave empty for today): ")?;
    let outcome = ExpenseService::add(
        book,
        NewExpense {
            category: assignment.name,
            amount,
            date,
        },
    )?;
    for warning in &outcome.warnings {
        output::warning(warning);
    }
    let expense = outcome.expense;
    output::success(format!(
        "{} {} added under '{}' ({}).",
        format_amount(expense.amount),
        CURRENCY_LABEL,
        expense.category,
        expense.date
    ));
    Ok(())
}

pub fn handle_list(book: &ExpenseBook) -> CommandResult {
    if book.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }
    output::section("Expense List");
    for (index, expense) in ExpenseService::list(book) {
        output::line(format!("{index}. {expense}"));
    }
    Ok(())
}

pub fn handle_delete(book: &mut ExpenseBook, input: &mut dyn LineSource) -> CommandResult {
    handle_list(book)?;
    if book.is_empty() {
        return Ok(());
    }
    let index = ask(input, "Enter the number of the expense to delete: ")?;
    let removed = ExpenseService::delete(book, &index)?;
    output::success(format!(
        "{} {} from '{}' deleted.",
        format_amount(removed.amount),
        CURRENCY_LABEL,
        removed.category
    ));
    Ok(())
}

pub fn handle_update(book: &mut ExpenseBook, input: &mut dyn LineSource) -> CommandResult {
    handle_list(book)?;
    if book.is_empty() {
        return Ok(());
    }
    let index = ask(input, "Enter the number of the expense to update: ")?;
    let (position, current) = ExpenseService::select(book, &index)?;
    output::info(format!("Updating: {current}"));

    let changes = ExpenseChanges {
        amount: ask(input, "New amount (leave empty to keep current): ")?,
        category: ask(input, "New category (leave empty to keep current): ")?,
        date: ask(input, "New date (YYYY-MM-DD, leave empty to keep current): ")?,
    };
    let outcome = ExpenseService::update_at(book, position, changes)?;
    for warning in &outcome.warnings {
        output::warning(warning);
    }
    output::success("Expense updated successfully.");
    Ok(())
}
