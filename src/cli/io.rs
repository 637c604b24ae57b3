use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use crate::cli::core::CliError;

/// Source of user answers for the shell.
pub trait LineSource {
    /// Shows `prompt` and returns the next answer without its line ending,
    /// or `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Asked after Ctrl-C at the main menu.
    fn confirm_exit(&mut self) -> Result<bool, CliError> {
        Ok(true)
    }
}

/// Reads an answer, treating end of input as a request to leave.
pub fn ask<S: LineSource + ?Sized>(source: &mut S, prompt: &str) -> Result<String, CliError> {
    source.read_line(prompt)?.ok_or(CliError::EndOfInput)
}

/// Line-by-line answers from any buffered reader; used when stdin is piped.
pub struct ScriptInput<R> {
    reader: R,
    echo_prompts: bool,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: true,
        }
    }

    pub fn quiet(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: false,
        }
    }
}

impl ScriptInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        if self.echo_prompts {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let answer = buffer.trim_end_matches(['\n', '\r']).to_string();
        if self.echo_prompts {
            println!();
        }
        Ok(Some(answer))
    }
}

/// Interactive line editor with history.
pub struct EditorInput {
    editor: Editor<(), DefaultHistory>,
    theme: ColorfulTheme,
}

impl EditorInput {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: Editor::new()?,
            theme: ColorfulTheme::default(),
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Err(CliError::Interrupted),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn confirm_exit(&mut self) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit the expense tracker?")
            .default(false)
            .interact()
            .map_err(CliError::from)
    }
}
