//! Tracing setup shared by the CLI and tests.
//!
//! The filter comes from `CONFORM_LOG` when set (standard `EnvFilter` syntax),
//! otherwise from the verbosity level.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "CONFORM_LOG";

/// Default filter directive for a verbosity level (`-v` count).
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "conform_core=info,conform_analysis=info,conform=info,warn",
        2 => "conform_core=debug,conform_analysis=debug,conform=debug,info",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init();
}
