//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber once per process
//! - Pick the default level from the `verbose` flag
//!
//! # Design Decisions
//! - `RUST_LOG` always wins over the flag, except that a fatal run failure
//!   is never filtered out
//! - Events go to stderr; ANSI colours only when stderr is a terminal

use std::io::IsTerminal;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::lifecycle::shutdown::FATAL_TARGET;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "ciphernexus=debug"
    } else {
        "ciphernexus=info"
    }
}

/// Build the filter from `RUST_LOG` and the verbose flag.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(rust_log.as_deref(), verbose)
}

/// `rust_log` if set and valid, otherwise the verbose default. The fatal
/// target is admitted at error level either way.
pub fn build_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)));

    match format!("{FATAL_TARGET}=error").parse::<Directive>() {
        Ok(fatal) => filter.add_directive(fatal),
        Err(_) => filter,
    }
}

/// Install the global subscriber.
pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}
