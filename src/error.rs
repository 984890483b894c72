//! Failure type returned by an application's run operation.

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An opaque run failure.
///
/// The bootstrap never inspects what went wrong; it only reports the
/// description and terminates.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct RunError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl RunError {
    /// Create a failure from a description alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a failure that wraps an underlying error.
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The description this failure was created with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the failure and its whole source chain on one line.
    pub fn report(&self) -> String {
        let mut line = self.message.clone();
        let mut next = StdError::source(self);
        while let Some(cause) = next {
            line.push_str(": ");
            line.push_str(&cause.to_string());
            next = cause.source();
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_is_the_message() {
        let err = RunError::new("key store unavailable");
        assert_eq!(err.to_string(), "key store unavailable");
        assert!(StdError::source(&err).is_none());
    }

    #[test]
    fn test_report_walks_source_chain() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "vault.bin missing");
        let err = RunError::with_source("failed to open vault", io_err);

        assert_eq!(err.message(), "failed to open vault");
        assert_eq!(err.report(), "failed to open vault: vault.bin missing");
    }

    #[test]
    fn test_report_nests_run_errors() {
        let inner = RunError::with_source("handshake failed", "peer closed connection");
        let outer = RunError::with_source("session aborted", inner);

        assert_eq!(
            outer.report(),
            "session aborted: handshake failed: peer closed connection"
        );
    }
}
