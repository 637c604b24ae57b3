pub mod commands;
pub mod core;
pub mod io;
pub mod menus;
pub mod output;
mod shell;

pub use shell::{run_cli, Shell};
