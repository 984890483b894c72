//! Bootstrap state machine.

use crate::error::RunError;

/// Exit status for a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for a fatal run failure, matching Go's `log.Fatal`.
pub const EXIT_FAILURE: u8 = 1;

/// The initial state, entered once at process start.
///
/// `finish` consumes it, so a terminated lifecycle can never run again.
#[derive(Debug)]
pub struct Running {
    _private: (),
}

impl Running {
    pub fn enter() -> Self {
        tracing::trace!("lifecycle entered Running");
        Self { _private: () }
    }

    /// Transition to the terminal state for the given run result.
    pub fn finish(self, result: Result<(), RunError>) -> Outcome {
        match result {
            Ok(()) => Outcome::Success,
            Err(e) => Outcome::Failure(e),
        }
    }
}

/// Terminal state of the bootstrap.
#[derive(Debug)]
pub enum Outcome {
    Success,
    Failure(RunError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn error(&self) -> Option<&RunError> {
        match self {
            Self::Success => None,
            Self::Failure(e) => Some(e),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success => EXIT_SUCCESS,
            Self::Failure(_) => EXIT_FAILURE,
        }
    }
}
