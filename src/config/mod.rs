use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

/// The expense store, relative to the working directory. This is the only store location.
pub const DEFAULT_STORE_FILE: &str = "expenses.json";

/// Runtime settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    /// Stdin is not a terminal: read answers line by line instead of through the line editor.
    pub piped_input: bool,
    /// Stdout is not a terminal: disable ANSI styling.
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            piped_input: false,
            plain_output: false,
        }
    }
}

impl Config {
    /// Default store location, with input and output modes taken from the attached streams.
    pub fn detect() -> Self {
        Self::for_streams(io::stdin().is_terminal(), io::stdout().is_terminal())
    }

    pub fn for_streams(stdin_is_terminal: bool, stdout_is_terminal: bool) -> Self {
        Self {
            piped_input: !stdin_is_terminal,
            plain_output: !stdout_is_terminal,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_expenses_json_in_working_directory() {
        assert_eq!(Config::default().store_path, PathBuf::from("expenses.json"));
        assert_eq!(
            Config::for_streams(false, false).store_path,
            PathBuf::from(DEFAULT_STORE_FILE)
        );
    }

    #[test]
    fn terminals_use_editor_and_colours() {
        let config = Config::for_streams(true, true);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn redirected_streams_switch_modes() {
        let config = Config::for_streams(false, false);
        assert!(config.piped_input);
        assert!(config.plain_output);
    }
}
