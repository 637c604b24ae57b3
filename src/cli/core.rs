use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::core::errors::ExpenseError;

/// Errors surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Ctrl-C while a prompt was open.
    #[error("interrupted")]
    Interrupted,
    /// Input closed (Ctrl-D or end of script).
    #[error("end of input")]
    EndOfInput,
}

impl CliError {
    /// Validation problems are printed and the menu is shown again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CliError::Core(err) if err.is_recoverable())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CliError>;
