//! Tracing setup for the command-line tool
//!
//! Logs go to stderr so they never mix with results on stdout.
//!
//! ## Log Levels
//!
//! - **WARN**: Opening-table problems and fallbacks (default)
//! - **INFO**: Word-list loading and, with `--verbose`, every solver round
//! - **DEBUG**: Every solver round

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default directive. Safe to call multiple times;
/// only the first call has effect.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let default = if verbose {
            "wordle_solver=info"
        } else {
            "wordle_solver=warn"
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
