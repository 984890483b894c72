//! Application subsystem.
//!
//! # Data Flow
//! ```text
//! RunConfiguration.verbose
//!     → factory (FnOnce(bool) -> A)
//!     → A: Application
//!     → run() once, yielding success or a RunError
//! ```
//!
//! # Design Decisions
//! - The bootstrap knows nothing about what an application does
//! - `run` consumes the application: it executes exactly once

pub mod nexus;

use std::future::Future;

use crate::error::RunError;

pub use nexus::CipherNexus;

/// A unit of work constructed from the run configuration and executed once.
pub trait Application {
    /// Execute the application to completion.
    fn run(self) -> impl Future<Output = Result<(), RunError>>;
}
