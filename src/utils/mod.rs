use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

/// Initializes the global tracing subscriber. Events go to stderr so the
/// console protocol on stdout stays readable; `RUST_LOG` overrides the level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
            .unwrap_or_default();

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}
