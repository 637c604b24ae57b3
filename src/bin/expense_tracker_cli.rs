use std::process;

use expense_tracker::{cli::run_cli, config::Config, init};

fn main() {
    init();

    let config = Config::detect();
    if let Err(err) = run_cli(&config) {
        tracing::error!(error = %err, "expense tracker stopped");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
