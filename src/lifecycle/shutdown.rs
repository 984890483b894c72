//! Process termination.

use std::process::ExitCode;

use crate::lifecycle::state::Outcome;

/// Target of the fatal failure event. The log filter always admits it.
pub const FATAL_TARGET: &str = "ciphernexus::fatal";

/// Convert the final outcome into the process exit status.
///
/// A failure is logged once at error level. Call this only from `main`.
pub fn terminate(outcome: Outcome) -> ExitCode {
    if let Outcome::Failure(e) = &outcome {
        tracing::error!(target: FATAL_TARGET, "{}", e.report());
    }
    ExitCode::from(outcome.exit_code())
}
