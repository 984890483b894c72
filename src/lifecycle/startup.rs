//! Startup orchestration.
//!
//! # Responsibilities
//! - Parse the run configuration from process arguments
//! - Construct the application from its factory
//! - Execute it once on the calling thread
//!
//! # Design Decisions
//! - Construction is infallible; only execution can fail
//! - Execution drives the application on a current-thread Tokio runtime,
//!   so the call blocks and no worker threads are spawned

use std::ffi::OsString;

use crate::app::Application;
use crate::config::RunConfiguration;
use crate::error::RunError;
use crate::lifecycle::state::{Outcome, Running};

/// Wires a run configuration into an application and runs it to an outcome.
pub struct Bootstrap<F> {
    factory: F,
}

impl<F, A> Bootstrap<F>
where
    F: FnOnce(bool) -> A,
    A: Application,
{
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Parse `args` and launch. Usage errors are returned untouched for
    /// clap to report.
    pub fn run<I, T>(self, args: I) -> Result<Outcome, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let config = RunConfiguration::try_from_args(args)?;
        Ok(self.launch(config))
    }

    /// Construct the application from `config` and execute it.
    pub fn launch(self, config: RunConfiguration) -> Outcome {
        let state = Running::enter();
        let app = construct(self.factory, config);
        state.finish(execute(app))
    }
}

/// Build the application, handing it the sole configuration value.
pub fn construct<F, A>(factory: F, config: RunConfiguration) -> A
where
    F: FnOnce(bool) -> A,
{
    tracing::debug!(verbose = config.verbose(), "Constructing application");
    factory(config.verbose())
}

/// Run the application to completion, blocking the calling thread.
pub fn execute<A: Application>(app: A) -> Result<(), RunError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| RunError::with_source("failed to start runtime", e))?;

    runtime.block_on(app.run())
}
