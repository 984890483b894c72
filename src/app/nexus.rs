//! The default ciphernexus application.

use crate::app::Application;
use crate::error::RunError;

/// The application the `ciphernexus` binary launches.
#[derive(Debug, Clone)]
pub struct CipherNexus {
    verbose: bool,
}

impl CipherNexus {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Application for CipherNexus {
    async fn run(self) -> Result<(), RunError> {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "ciphernexus starting");
        tracing::debug!(verbose = self.verbose, "Configuration loaded");

        tracing::info!("ciphernexus finished");
        Ok(())
    }
}
