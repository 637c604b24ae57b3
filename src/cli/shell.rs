use crate::cli::commands::{expense_handlers, summary_handlers};
use crate::cli::core::{CliError, LoopControl};
use crate::cli::io::{EditorInput, LineSource, ScriptInput};
use crate::cli::menus::main_menu::{self, MainMenuItem, CHOICE_PROMPT};
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;
use crate::core::ExpenseBook;
use crate::storage::JsonStorage;

const FAREWELL: &str = "Program exited.";

/// Opens the configured store and runs the menu loop until the user exits.
pub fn run_cli(config: &Config) -> Result<(), CliError> {
    output::set_preferences(OutputPreferences {
        plain: config.plain_output,
    });

    let storage = JsonStorage::new(config.store_path.clone());
    let book = ExpenseBook::open(Box::new(storage))?;

    if config.piped_input {
        Shell::new(book, ScriptInput::stdin()).run()
    } else {
        Shell::new(book, EditorInput::new()?).run()
    }
}

/// Main-menu state machine over one [`ExpenseBook`].
pub struct Shell<S> {
    book: ExpenseBook,
    input: S,
}

impl<S: LineSource> Shell<S> {
    pub fn new(book: ExpenseBook, input: S) -> Self {
        Self { book, input }
    }

    pub fn book(&self) -> &ExpenseBook {
        &self.book
    }

    pub fn into_book(self) -> ExpenseBook {
        self.book
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        tracing::info!(expenses = self.book.len(), "shell started");
        loop {
            main_menu::render();
            let line = match self.input.read_line(CHOICE_PROMPT) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(CliError::Interrupted) => {
                    if self.input.confirm_exit()? {
                        break;
                    }
                    continue;
                }
                Err(err) => return Err(err),
            };

            let Some(item) = MainMenuItem::from_choice(&line) else {
                output::error("Invalid choice!");
                continue;
            };

            match self.dispatch(item) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) if err.is_recoverable() => output::error(err),
                Err(CliError::Interrupted) => output::info("Cancelled."),
                Err(CliError::EndOfInput) => break,
                Err(err) => return Err(err),
            }
        }
        output::info(FAREWELL);
        tracing::info!("shell exited");
        Ok(())
    }

    fn dispatch(&mut self, item: MainMenuItem) -> Result<LoopControl, CliError> {
        let book = &mut self.book;
        let input = &mut self.input;
        match item {
            MainMenuItem::AddExpense => expense_handlers::handle_add(book, input)?,
            MainMenuItem::ListExpenses => expense_handlers::handle_list(book)?,
            MainMenuItem::DeleteExpense => expense_handlers::handle_delete(book, input)?,
            MainMenuItem::UpdateExpense => expense_handlers::handle_update(book, input)?,
            MainMenuItem::MonthlyTotal => summary_handlers::handle_monthly_total(book, input)?,
            MainMenuItem::FilterByCategory => {
                summary_handlers::handle_filter_by_category(book, input)?
            }
            MainMenuItem::Exit => return Ok(LoopControl::Exit),
        }
        Ok(LoopControl::Continue)
    }
}
